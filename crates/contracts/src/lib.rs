pub mod dashboards;
pub mod reports;
pub mod shared;
