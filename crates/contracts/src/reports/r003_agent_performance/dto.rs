use serde::{Deserialize, Serialize};

/// Query string of `GET /api/agent-performance`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentPerformanceRequest {
    /// English month name, e.g. "January". All months when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
}

/// Resolution time of one agent for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AgentPerformance {
    pub agent: String,
    pub month: String,
    /// Average ticket resolution time, minutes
    pub resolution_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let row: AgentPerformance = serde_json::from_str(
            r#"{"agent":"Agent A","month":"January","resolutionTime":30}"#,
        )
        .unwrap();
        assert_eq!(row.agent, "Agent A");
        assert_eq!(row.resolution_time, 30.0);

        let back = serde_json::to_value(&row).unwrap();
        assert!(back.get("resolutionTime").is_some());
        assert!(back.get("resolution_time").is_none());
    }
}
