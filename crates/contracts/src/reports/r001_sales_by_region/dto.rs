use serde::{Deserialize, Serialize};

/// Total sales of one salesperson within a region
///
/// Wire shape: `{"salesperson": "...", "totalSales": 1000.0}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SalespersonSales {
    pub salesperson: String,
    pub total_sales: f64,
}
