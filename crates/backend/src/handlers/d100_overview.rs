use axum::extract::State;
use axum::Json;
use contracts::dashboards::d100_overview::{
    AgentAverage, FeedbackAverage, RegionSalesTotal, ReportTypeCounts,
};

use crate::dashboards::d100_overview::repository;
use crate::shared::data::db::ReportStore;
use crate::shared::error::ApiError;

/// GET /dashboard/sales-data
pub async fn sales_data(
    State(store): State<ReportStore>,
) -> Result<Json<Vec<RegionSalesTotal>>, ApiError> {
    let rows = repository::sales_by_region(&store)
        .await
        .map_err(|e| ApiError::store("Error fetching dashboard sales data", e))?;
    tracing::info!("D100 Dashboard: Returning {} regions", rows.len());
    Ok(Json(rows))
}

/// GET /dashboard/agent-performance
pub async fn agent_performance(
    State(store): State<ReportStore>,
) -> Result<Json<Vec<AgentAverage>>, ApiError> {
    let rows = repository::agent_averages(&store)
        .await
        .map_err(|e| ApiError::store("Error fetching dashboard agent performance", e))?;
    tracing::info!("D100 Dashboard: Returning {} agents", rows.len());
    Ok(Json(rows))
}

/// GET /dashboard/customer-feedback
pub async fn customer_feedback(
    State(store): State<ReportStore>,
) -> Result<Json<Vec<FeedbackAverage>>, ApiError> {
    let rows = repository::feedback_averages(&store)
        .await
        .map_err(|e| ApiError::store("Error fetching dashboard customer feedback", e))?;
    tracing::info!("D100 Dashboard: Returning {} feedback types", rows.len());
    Ok(Json(rows))
}

/// GET /dashboard/report-types
pub async fn report_types(
    State(store): State<ReportStore>,
) -> Result<Json<ReportTypeCounts>, ApiError> {
    let counts = repository::report_type_counts(&store)
        .await
        .map_err(|e| ApiError::store("Error fetching dashboard report types", e))?;
    tracing::info!(
        "D100 Dashboard: Returning {} report types",
        counts.report_types.len()
    );
    Ok(Json(counts))
}
