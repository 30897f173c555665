use serde::{Deserialize, Serialize};

/// `GET /dashboard/sales-data`: bar chart, one bar per region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegionSalesTotal {
    pub region: String,
    pub total_amount: f64,
}

/// `GET /dashboard/agent-performance`: line chart, one point per agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AgentAverage {
    pub name: String,
    pub average_performance: f64,
}

/// `GET /dashboard/customer-feedback`: pie chart, one slice per feedback type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeedbackAverage {
    pub feedback_type: String,
    pub average_performance: f64,
}

/// `GET /dashboard/report-types`: doughnut chart
///
/// `report_types[i]` was generated `report_counts[i]` times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReportTypeCounts {
    pub report_types: Vec<String>,
    pub report_counts: Vec<u64>,
}

impl ReportTypeCounts {
    /// Build from `(type, count)` pairs, keeping their order
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, u64)>) -> Self {
        let (report_types, report_counts) = pairs.into_iter().unzip();
        Self {
            report_types,
            report_counts,
        }
    }
}
