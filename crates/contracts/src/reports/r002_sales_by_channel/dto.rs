use serde::{Deserialize, Serialize};

/// Total sales of one sales channel (Online, Retail, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChannelSales {
    pub channel: String,
    pub total_sales: f64,
}

/// Static message returned with a 500 when the channel aggregation fails
pub const CHANNEL_FETCH_ERROR: &str = "Error fetching sales data by channel";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let row = ChannelSales {
            channel: "Online".to_string(),
            total_sales: 5000.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "channel": "Online", "totalSales": 5000.0 })
        );
    }

    #[test]
    fn test_rejects_internal_id_field() {
        let raw = r#"{"_id":"Online","channel":"Online","totalSales":5000}"#;
        assert!(serde_json::from_str::<ChannelSales>(raw).is_err());
    }

    #[test]
    fn test_accepts_integer_totals() {
        let rows: Vec<ChannelSales> = serde_json::from_str(
            r#"[{"channel":"Online","totalSales":5000},{"channel":"Retail","totalSales":3000}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].total_sales, 3000.0);
    }
}
