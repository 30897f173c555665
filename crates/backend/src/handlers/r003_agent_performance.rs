use axum::extract::{Query, State};
use axum::Json;
use chrono::Month;
use contracts::reports::r003_agent_performance::{AgentPerformance, AgentPerformanceRequest};

use crate::reports::r003_agent_performance::repository;
use crate::shared::data::db::ReportStore;
use crate::shared::error::ApiError;

/// Canonical English month name ("jan", "JANUARY" -> "January")
fn canonical_month(raw: &str) -> Option<&'static str> {
    raw.trim().parse::<Month>().ok().map(|m| m.name())
}

/// GET /api/agent-performance?month=January
pub async fn agent_performance(
    State(store): State<ReportStore>,
    Query(request): Query<AgentPerformanceRequest>,
) -> Result<Json<Vec<AgentPerformance>>, ApiError> {
    let month = match request.month.as_deref() {
        Some(raw) => Some(
            canonical_month(raw).ok_or_else(|| ApiError::InvalidQuery("Invalid month".to_string()))?,
        ),
        None => None,
    };

    let rows = repository::agent_performance(&store, month)
        .await
        .map_err(|e| ApiError::store("Error fetching agent performance data", e))?;
    tracing::info!(
        "R003: Returning {} agent rows for {}",
        rows.len(),
        month.unwrap_or("all months")
    );
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_month() {
        assert_eq!(canonical_month("January"), Some("January"));
        assert_eq!(canonical_month("january"), Some("January"));
        assert_eq!(canonical_month(" feb "), Some("February"));
        assert_eq!(canonical_month("Smarch"), None);
        assert_eq!(canonical_month(""), None);
    }
}
