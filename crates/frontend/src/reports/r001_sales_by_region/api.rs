use contracts::reports::r001_sales_by_region::SalespersonSales;

use crate::reports::r001_sales_by_region::state::region_path;
use crate::shared::api_utils::{get_json, ApiConfig};

/// Distinct region names, sorted
pub async fn get_regions(config: &ApiConfig) -> Result<Vec<String>, String> {
    get_json(&config.url("/api/reports/sales/regions")).await
}

/// Sales of one region, grouped by salesperson
pub async fn get_sales_by_region(
    config: &ApiConfig,
    region: &str,
) -> Result<Vec<SalespersonSales>, String> {
    get_json(&config.url(&region_path(region))).await
}
