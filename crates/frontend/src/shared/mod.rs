pub mod api_utils;
pub mod chart;
pub mod number_format;
pub mod report_state;
pub mod report_table;
