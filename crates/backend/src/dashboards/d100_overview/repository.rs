use anyhow::Result;
use contracts::dashboards::d100_overview::{
    AgentAverage, FeedbackAverage, RegionSalesTotal, ReportTypeCounts,
};
use sea_orm::{DatabaseBackend, FromQueryResult, Statement};

use crate::shared::data::db::ReportStore;

/// `(label, value)` pair produced by every dashboard aggregation
#[derive(Debug, FromQueryResult)]
struct LabelValue {
    label: String,
    value: f64,
}

#[derive(Debug, FromQueryResult)]
struct LabelCount {
    label: String,
    value: i64,
}

async fn label_values(store: &ReportStore, sql: &'static str) -> Result<Vec<LabelValue>> {
    store
        .with_db(|db| async move {
            let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
            Ok(LabelValue::find_by_statement(stmt).all(&db).await?)
        })
        .await
}

/// Sales amount per region
pub async fn sales_by_region(store: &ReportStore) -> Result<Vec<RegionSalesTotal>> {
    let rows = label_values(
        store,
        r#"
        SELECT region AS label, COALESCE(SUM(amount), 0) AS value
        FROM sales
        GROUP BY region
        ORDER BY region
        "#,
    )
    .await?;
    Ok(rows
        .into_iter()
        .map(|r| RegionSalesTotal {
            region: r.label,
            total_amount: r.value,
        })
        .collect())
}

/// Average performance score per agent
pub async fn agent_averages(store: &ReportStore) -> Result<Vec<AgentAverage>> {
    let rows = label_values(
        store,
        r#"
        SELECT agent AS label, AVG(performance) AS value
        FROM agent_performance
        GROUP BY agent
        ORDER BY agent
        "#,
    )
    .await?;
    Ok(rows
        .into_iter()
        .map(|r| AgentAverage {
            name: r.label,
            average_performance: r.value,
        })
        .collect())
}

/// Average feedback score per feedback type
pub async fn feedback_averages(store: &ReportStore) -> Result<Vec<FeedbackAverage>> {
    let rows = label_values(
        store,
        r#"
        SELECT feedback_type AS label, AVG(performance) AS value
        FROM customer_feedback
        GROUP BY feedback_type
        ORDER BY feedback_type
        "#,
    )
    .await?;
    Ok(rows
        .into_iter()
        .map(|r| FeedbackAverage {
            feedback_type: r.label,
            average_performance: r.value,
        })
        .collect())
}

/// Number of generated reports per report type
pub async fn report_type_counts(store: &ReportStore) -> Result<ReportTypeCounts> {
    let rows = store
        .with_db(|db| async move {
            let sql = r#"
                SELECT report_type AS label, COUNT(*) AS value
                FROM reports
                GROUP BY report_type
                ORDER BY report_type
            "#;
            let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
            Ok(LabelCount::find_by_statement(stmt).all(&db).await?)
        })
        .await?;
    Ok(ReportTypeCounts::from_pairs(
        rows.into_iter().map(|r| (r.label, r.value.max(0) as u64)),
    ))
}
