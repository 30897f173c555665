use serde::{Deserialize, Serialize};

/// Fixed envelope for routing-level errors (unknown route, bad query)
///
/// `{"message": "Not Found", "status": 404, "type": "error"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorEnvelope {
    pub message: String,
    pub status: u16,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ErrorEnvelope {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            kind: "error".to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }
}

/// Body of a 500 caused by a data store failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FailureBody {
    /// Static, endpoint-specific message
    pub message: String,
    /// Text of the underlying error
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_envelope() {
        let json = serde_json::to_value(ErrorEnvelope::not_found()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Not Found", "status": 404, "type": "error" })
        );
    }
}
