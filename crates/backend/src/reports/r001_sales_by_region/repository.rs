use anyhow::Result;
use contracts::reports::r001_sales_by_region::SalespersonSales;
use sea_orm::{DatabaseBackend, FromQueryResult, Statement};

use crate::shared::data::db::ReportStore;

#[derive(Debug, FromQueryResult)]
struct RegionRow {
    region: String,
}

#[derive(Debug, FromQueryResult)]
struct SalespersonRow {
    salesperson: String,
    total_sales: f64,
}

impl From<SalespersonRow> for SalespersonSales {
    fn from(row: SalespersonRow) -> Self {
        Self {
            salesperson: row.salesperson,
            total_sales: row.total_sales,
        }
    }
}

/// Distinct sales regions, ascending
pub async fn list_regions(store: &ReportStore) -> Result<Vec<String>> {
    store
        .with_db(|db| async move {
            let stmt = Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT DISTINCT region FROM sales ORDER BY region".to_string(),
            );
            let rows = RegionRow::find_by_statement(stmt).all(&db).await?;
            Ok(rows.into_iter().map(|r| r.region).collect())
        })
        .await
}

/// Sales of one region grouped by salesperson, sorted by salesperson
pub async fn sales_by_region(store: &ReportStore, region: &str) -> Result<Vec<SalespersonSales>> {
    let region = region.to_string();
    store
        .with_db(|db| async move {
            let sql = r#"
                SELECT
                    salesperson,
                    COALESCE(SUM(amount), 0) AS total_sales
                FROM sales
                WHERE region = ?
                GROUP BY salesperson
                ORDER BY salesperson
            "#;
            let stmt =
                Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, [region.into()]);
            let rows = SalespersonRow::find_by_statement(stmt).all(&db).await?;
            Ok(rows.into_iter().map(SalespersonSales::from).collect())
        })
        .await
}
