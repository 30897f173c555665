use axum::extract::{Path, State};
use axum::Json;
use contracts::reports::r001_sales_by_region::SalespersonSales;

use crate::reports::r001_sales_by_region::repository;
use crate::shared::data::db::ReportStore;
use crate::shared::error::ApiError;

/// GET /api/reports/sales/regions
pub async fn list_regions(State(store): State<ReportStore>) -> Result<Json<Vec<String>>, ApiError> {
    let regions = repository::list_regions(&store)
        .await
        .map_err(|e| ApiError::store("Error fetching sales regions", e))?;
    tracing::info!("R001: Returning {} regions", regions.len());
    Ok(Json(regions))
}

/// GET /api/reports/sales/regions/:region
pub async fn sales_by_region(
    State(store): State<ReportStore>,
    Path(region): Path<String>,
) -> Result<Json<Vec<SalespersonSales>>, ApiError> {
    let rows = repository::sales_by_region(&store, &region)
        .await
        .map_err(|e| ApiError::store("Error fetching sales data for region", e))?;
    tracing::info!(
        "R001: Returning {} salesperson rows for region '{}'",
        rows.len(),
        region
    );
    Ok(Json(rows))
}
