use axum::extract::State;
use axum::Json;
use contracts::reports::r002_sales_by_channel::{ChannelSales, CHANNEL_FETCH_ERROR};

use crate::reports::r002_sales_by_channel::repository;
use crate::shared::data::db::ReportStore;
use crate::shared::error::ApiError;

/// GET /api/sales/channel
pub async fn sales_by_channel(
    State(store): State<ReportStore>,
) -> Result<Json<Vec<ChannelSales>>, ApiError> {
    let rows = repository::sales_by_channel(&store)
        .await
        .map_err(|e| ApiError::store(CHANNEL_FETCH_ERROR, e))?;
    tracing::info!("R002: Returning {} channel rows", rows.len());
    Ok(Json(rows))
}
