// Report handlers (r001-r003)
pub mod r001_sales_by_region;
pub mod r002_sales_by_channel;
pub mod r003_agent_performance;

// Dashboard handlers (d100)
pub mod d100_overview;

// Fallback and health
pub mod fallback;
