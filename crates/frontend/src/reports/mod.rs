pub mod r001_sales_by_region;
pub mod r002_sales_by_channel;
pub mod r003_agent_performance;

pub use r001_sales_by_region::ui::SalesByRegion;
pub use r002_sales_by_channel::ui::SalesByChannel;
pub use r003_agent_performance::ui::AgentPerformanceReport;
