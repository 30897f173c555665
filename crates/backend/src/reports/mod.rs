pub mod r001_sales_by_region;
pub mod r002_sales_by_channel;
pub mod r003_agent_performance;
