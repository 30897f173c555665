use contracts::reports::r001_sales_by_region::SalespersonSales;

use crate::shared::number_format::format_currency;

pub const HEADERS: [&str; 2] = ["Salesperson", "Total Sales"];
pub const REGIONS_FETCH_ERROR: &str = "Error fetching sales regions";
pub const REGION_SALES_FETCH_ERROR: &str = "Error fetching sales data for region";
pub const EMPTY_TEXT: &str = "No sales data available for this region.";

/// API path for one region; the name is sent as a single encoded segment
pub fn region_path(region: &str) -> String {
    format!("/api/reports/sales/regions/{}", urlencoding::encode(region))
}

pub fn region_table_rows(rows: &[SalespersonSales]) -> Vec<[String; 2]> {
    rows.iter()
        .map(|row| [row.salesperson.clone(), format_currency(row.total_sales)])
        .collect()
}
