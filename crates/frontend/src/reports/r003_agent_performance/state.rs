use chrono::Month;
use contracts::reports::r003_agent_performance::{AgentPerformance, AgentPerformanceRequest};

use crate::shared::number_format::format_minutes;
use crate::shared::report_state::ReportState;

pub const HEADERS: [&str; 3] = ["Agent", "Month", "Resolution Time"];
pub const DEFAULT_MONTH: &str = "January";
pub const FETCH_ERROR: &str = "Error fetching data";
pub const EMPTY_TEXT: &str = "No performance data available for this month.";

pub fn agent_performance_path(month: Option<&str>) -> String {
    let request = AgentPerformanceRequest {
        month: month.map(str::to_string),
    };
    let query = serde_qs::to_string(&request).unwrap_or_default();
    if query.is_empty() {
        "/api/agent-performance".to_string()
    } else {
        format!("/api/agent-performance?{}", query)
    }
}

/// Month names offered by the selector, January first
pub fn month_names() -> Vec<&'static str> {
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .map(|m| m.name())
        .collect()
}

/// Sample rows shown when the fetch fails
pub fn fallback_rows() -> Vec<AgentPerformance> {
    vec![
        AgentPerformance {
            agent: "Agent 1".to_string(),
            month: "January".to_string(),
            resolution_time: 120.0,
        },
        AgentPerformance {
            agent: "Agent 2".to_string(),
            month: "January".to_string(),
            resolution_time: 180.0,
        },
    ]
}

/// Like [`ReportState::apply`], but a failed fetch shows the sample rows
/// together with the error so they are never mistaken for live data.
pub fn apply_result<E: std::fmt::Display>(
    state: &mut ReportState<AgentPerformance>,
    result: Result<Vec<AgentPerformance>, E>,
) {
    let failed = result.is_err();
    state.apply(result, FETCH_ERROR);
    if failed {
        state.rows = fallback_rows();
    }
}

pub fn agent_table_rows(rows: &[AgentPerformance]) -> Vec<[String; 3]> {
    rows.iter()
        .map(|row| {
            [
                row.agent.clone(),
                row.month.clone(),
                format_minutes(row.resolution_time),
            ]
        })
        .collect()
}
