use anyhow::Result;
use contracts::reports::r003_agent_performance::AgentPerformance;
use sea_orm::{DatabaseBackend, FromQueryResult, Statement, Value};

use crate::shared::data::db::ReportStore;

#[derive(Debug, FromQueryResult)]
struct AgentPerformanceRow {
    agent: String,
    month: String,
    resolution_time: f64,
}

/// Resolution times per agent; one month or, with `None`, all months
pub async fn agent_performance(
    store: &ReportStore,
    month: Option<&str>,
) -> Result<Vec<AgentPerformance>> {
    let month = month.map(str::to_string);
    store
        .with_db(|db| async move {
            let (sql, values): (&str, Vec<Value>) = match month {
                Some(month) => (
                    r#"
                    SELECT agent, month, resolution_time
                    FROM agent_performance
                    WHERE month = ?
                    ORDER BY agent
                    "#,
                    vec![month.into()],
                ),
                None => (
                    r#"
                    SELECT agent, month, resolution_time
                    FROM agent_performance
                    ORDER BY agent, month
                    "#,
                    vec![],
                ),
            };
            let stmt = Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, values);
            let rows = AgentPerformanceRow::find_by_statement(stmt).all(&db).await?;
            Ok(rows
                .into_iter()
                .map(|r| AgentPerformance {
                    agent: r.agent,
                    month: r.month,
                    resolution_time: r.resolution_time,
                })
                .collect())
        })
        .await
}
