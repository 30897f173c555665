use contracts::reports::r002_sales_by_channel::ChannelSales;

use crate::shared::number_format::format_currency;

pub const HEADERS: [&str; 2] = ["Channel", "Total Sales"];
pub const EMPTY_TEXT: &str = "No sales data available.";

pub fn channel_table_rows(rows: &[ChannelSales]) -> Vec<[String; 2]> {
    rows.iter()
        .map(|row| [row.channel.clone(), format_currency(row.total_sales)])
        .collect()
}
