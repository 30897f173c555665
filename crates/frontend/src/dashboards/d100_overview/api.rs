use contracts::dashboards::d100_overview::{
    AgentAverage, FeedbackAverage, RegionSalesTotal, ReportTypeCounts,
};

use crate::shared::api_utils::{get_json, ApiConfig};

pub async fn get_sales_data(config: &ApiConfig) -> Result<Vec<RegionSalesTotal>, String> {
    get_json(&config.url("/dashboard/sales-data")).await
}

pub async fn get_agent_performance(config: &ApiConfig) -> Result<Vec<AgentAverage>, String> {
    get_json(&config.url("/dashboard/agent-performance")).await
}

pub async fn get_customer_feedback(config: &ApiConfig) -> Result<Vec<FeedbackAverage>, String> {
    get_json(&config.url("/dashboard/customer-feedback")).await
}

pub async fn get_report_types(config: &ApiConfig) -> Result<ReportTypeCounts, String> {
    get_json(&config.url("/dashboard/report-types")).await
}
