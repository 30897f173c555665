use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, FromQueryResult, Statement, Value,
};

use super::db::ReportStore;

pub struct SaleSeed<'a> {
    pub region: &'a str,
    pub salesperson: &'a str,
    pub channel: &'a str,
    pub amount: f64,
}

pub struct AgentSeed<'a> {
    pub agent: &'a str,
    pub month: &'a str,
    pub resolution_time: f64,
    pub performance: f64,
}

const SAMPLE_SALES: &[SaleSeed<'static>] = &[
    SaleSeed { region: "North", salesperson: "John Doe", channel: "Online", amount: 1200.0 },
    SaleSeed { region: "North", salesperson: "Jane Smith", channel: "Retail", amount: 1500.0 },
    SaleSeed { region: "North", salesperson: "John Doe", channel: "Retail", amount: 800.0 },
    SaleSeed { region: "South", salesperson: "Carlos Ruiz", channel: "Online", amount: 2100.0 },
    SaleSeed { region: "South", salesperson: "Amy Chen", channel: "Wholesale", amount: 3400.0 },
    SaleSeed { region: "East", salesperson: "Priya Patel", channel: "Online", amount: 950.0 },
    SaleSeed { region: "East", salesperson: "Amy Chen", channel: "Retail", amount: 1300.0 },
    SaleSeed { region: "West", salesperson: "Tom Becker", channel: "Wholesale", amount: 2750.0 },
    SaleSeed { region: "West", salesperson: "Jane Smith", channel: "Online", amount: 1650.0 },
];

const SAMPLE_AGENTS: &[AgentSeed<'static>] = &[
    AgentSeed { agent: "Agent 1", month: "January", resolution_time: 120.0, performance: 82.0 },
    AgentSeed { agent: "Agent 2", month: "January", resolution_time: 180.0, performance: 74.0 },
    AgentSeed { agent: "Agent 3", month: "January", resolution_time: 95.0, performance: 91.0 },
    AgentSeed { agent: "Agent 1", month: "February", resolution_time: 110.0, performance: 86.0 },
    AgentSeed { agent: "Agent 2", month: "February", resolution_time: 150.0, performance: 78.0 },
    AgentSeed { agent: "Agent 3", month: "February", resolution_time: 100.0, performance: 89.0 },
];

const SAMPLE_FEEDBACK: &[(&str, f64)] = &[
    ("Service", 4.5),
    ("Service", 3.9),
    ("Product", 4.1),
    ("Delivery", 3.2),
    ("Delivery", 3.8),
    ("Support", 4.7),
];

const SAMPLE_REPORTS: &[(&str, usize)] = &[
    ("Sales", 6),
    ("Agent Performance", 3),
    ("Customer Feedback", 4),
];

#[derive(Debug, FromQueryResult)]
struct RowCount {
    count: i64,
}

async fn exec(db: &DatabaseConnection, sql: &str, values: Vec<Value>) -> anyhow::Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        values,
    ))
    .await?;
    Ok(())
}

fn new_id() -> Value {
    uuid::Uuid::new_v4().to_string().into()
}

pub async fn insert_sale(db: &DatabaseConnection, sale: &SaleSeed<'_>) -> anyhow::Result<()> {
    exec(
        db,
        "INSERT INTO sales (id, region, salesperson, channel, amount) VALUES (?, ?, ?, ?, ?)",
        vec![
            new_id(),
            sale.region.into(),
            sale.salesperson.into(),
            sale.channel.into(),
            sale.amount.into(),
        ],
    )
    .await
}

pub async fn insert_agent_performance(
    db: &DatabaseConnection,
    row: &AgentSeed<'_>,
) -> anyhow::Result<()> {
    exec(
        db,
        "INSERT INTO agent_performance (id, agent, month, resolution_time, performance) VALUES (?, ?, ?, ?, ?)",
        vec![
            new_id(),
            row.agent.into(),
            row.month.into(),
            row.resolution_time.into(),
            row.performance.into(),
        ],
    )
    .await
}

pub async fn insert_feedback(
    db: &DatabaseConnection,
    feedback_type: &str,
    performance: f64,
) -> anyhow::Result<()> {
    exec(
        db,
        "INSERT INTO customer_feedback (id, feedback_type, performance) VALUES (?, ?, ?)",
        vec![new_id(), feedback_type.into(), performance.into()],
    )
    .await
}

pub async fn insert_report(db: &DatabaseConnection, report_type: &str) -> anyhow::Result<()> {
    exec(
        db,
        "INSERT INTO reports (id, report_type) VALUES (?, ?)",
        vec![new_id(), report_type.into()],
    )
    .await
}

async fn is_empty(db: &DatabaseConnection, table: &str) -> anyhow::Result<bool> {
    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        format!("SELECT COUNT(*) AS count FROM {}", table),
    );
    let row = RowCount::find_by_statement(stmt).one(db).await?;
    Ok(row.map(|r| r.count == 0).unwrap_or(true))
}

/// Fill empty tables with a small, fixed sample data set.
/// Tables that already contain rows are left alone.
pub async fn seed_sample_data(store: &ReportStore) -> anyhow::Result<()> {
    store
        .with_db(|db| async move {
            if is_empty(&db, "sales").await? {
                for sale in SAMPLE_SALES {
                    insert_sale(&db, sale).await?;
                }
                tracing::info!("Seeded {} sample sales", SAMPLE_SALES.len());
            }

            if is_empty(&db, "agent_performance").await? {
                for row in SAMPLE_AGENTS {
                    insert_agent_performance(&db, row).await?;
                }
                tracing::info!("Seeded {} agent performance rows", SAMPLE_AGENTS.len());
            }

            if is_empty(&db, "customer_feedback").await? {
                for (feedback_type, performance) in SAMPLE_FEEDBACK {
                    insert_feedback(&db, feedback_type, *performance).await?;
                }
                tracing::info!("Seeded {} customer feedback rows", SAMPLE_FEEDBACK.len());
            }

            if is_empty(&db, "reports").await? {
                for (report_type, count) in SAMPLE_REPORTS {
                    for _ in 0..*count {
                        insert_report(&db, report_type).await?;
                    }
                }
                tracing::info!("Seeded report log");
            }

            Ok(())
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_fills_empty_tables_once() {
        let store = ReportStore::connect("sqlite::memory:").await.unwrap();
        seed_sample_data(&store).await.unwrap();
        seed_sample_data(&store).await.unwrap();

        let count = store
            .with_db(|db| async move {
                let stmt = Statement::from_string(
                    DatabaseBackend::Sqlite,
                    "SELECT COUNT(*) AS count FROM sales".to_string(),
                );
                Ok(RowCount::find_by_statement(stmt).one(&db).await?)
            })
            .await
            .unwrap()
            .map(|r| r.count)
            .unwrap_or_default();
        assert_eq!(count, SAMPLE_SALES.len() as i64);
    }
}
