use contracts::reports::r003_agent_performance::AgentPerformance;

use crate::reports::r003_agent_performance::state::agent_performance_path;
use crate::shared::api_utils::{get_json, ApiConfig};

/// Resolution times for `month` (all months when `None`)
pub async fn get_agent_performance(
    config: &ApiConfig,
    month: Option<&str>,
) -> Result<Vec<AgentPerformance>, String> {
    get_json(&config.url(&agent_performance_path(month))).await
}
