use contracts::reports::r002_sales_by_channel::ChannelSales;

use crate::shared::api_utils::{get_json, ApiConfig};

/// Total sales per channel
pub async fn get_sales_by_channel(config: &ApiConfig) -> Result<Vec<ChannelSales>, String> {
    get_json(&config.url("/api/sales/channel")).await
}
