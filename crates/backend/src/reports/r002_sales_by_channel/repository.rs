use anyhow::Result;
use contracts::reports::r002_sales_by_channel::ChannelSales;
use sea_orm::{DatabaseBackend, FromQueryResult, Statement};

use crate::shared::data::db::ReportStore;

#[derive(Debug, FromQueryResult)]
struct ChannelRow {
    channel: String,
    total_sales: f64,
}

/// Total sales per channel
pub async fn sales_by_channel(store: &ReportStore) -> Result<Vec<ChannelSales>> {
    store
        .with_db(|db| async move {
            let sql = r#"
                SELECT
                    channel,
                    COALESCE(SUM(amount), 0) AS total_sales
                FROM sales
                GROUP BY channel
                ORDER BY channel
            "#;
            let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
            let rows = ChannelRow::find_by_statement(stmt).all(&db).await?;
            Ok(rows
                .into_iter()
                .map(|r| ChannelSales {
                    channel: r.channel,
                    total_sales: r.total_sales,
                })
                .collect())
        })
        .await
}
