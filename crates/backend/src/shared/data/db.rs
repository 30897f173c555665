use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::future::Future;
use std::path::Path;

/// Tables of the report store. Each one plays the role of a document collection.
const SCHEMA: &[(&str, &str)] = &[
    (
        "sales",
        r#"
        CREATE TABLE IF NOT EXISTS sales (
            id TEXT PRIMARY KEY NOT NULL,
            region TEXT NOT NULL,
            salesperson TEXT NOT NULL,
            channel TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "agent_performance",
        r#"
        CREATE TABLE IF NOT EXISTS agent_performance (
            id TEXT PRIMARY KEY NOT NULL,
            agent TEXT NOT NULL,
            month TEXT NOT NULL,
            resolution_time REAL NOT NULL DEFAULT 0,
            performance REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "customer_feedback",
        r#"
        CREATE TABLE IF NOT EXISTS customer_feedback (
            id TEXT PRIMARY KEY NOT NULL,
            feedback_type TEXT NOT NULL,
            performance REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "reports",
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id TEXT PRIMARY KEY NOT NULL,
            report_type TEXT NOT NULL
        );
        "#,
    ),
];

/// Handle to the report store, shared by all handlers through router state.
#[derive(Clone, Debug)]
pub struct ReportStore {
    conn: DatabaseConnection,
}

impl ReportStore {
    /// Open a connection without touching the schema
    pub async fn open(db_url: &str) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new(db_url.to_owned());
        // An in-memory database lives and dies with its connection
        if db_url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }
        options.sqlx_logging(false);
        let conn = Database::connect(options).await?;
        Ok(Self { conn })
    }

    /// Open a connection and make sure every report table exists
    pub async fn connect(db_url: &str) -> anyhow::Result<Self> {
        let store = Self::open(db_url).await?;
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> anyhow::Result<()> {
        for (table, ddl) in SCHEMA {
            tracing::debug!("Ensuring table {}", table);
            self.conn
                .execute(Statement::from_string(
                    DatabaseBackend::Sqlite,
                    ddl.to_string(),
                ))
                .await?;
        }
        Ok(())
    }

    /// Run `op` with a live database handle.
    ///
    /// Errors are logged and handed back to the caller unchanged; there is no
    /// retry and no transaction around `op`.
    pub async fn with_db<T, F, Fut>(&self, op: F) -> anyhow::Result<T>
    where
        F: FnOnce(DatabaseConnection) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        op(self.conn.clone()).await.map_err(|e| {
            tracing::error!("Report store query failed: {}", e);
            e
        })
    }
}

/// Open (or create) the SQLite file at `db_path` and bootstrap the schema
pub async fn initialize_database(db_path: &Path) -> anyhow::Result<ReportStore> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_path.is_absolute() {
        db_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening report store at {}", absolute_path.display());
    ReportStore::connect(&db_url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::FromQueryResult;

    #[derive(Debug, FromQueryResult)]
    struct TableName {
        name: String,
    }

    #[tokio::test]
    async fn test_connect_creates_all_tables() {
        let store = ReportStore::connect("sqlite::memory:").await.unwrap();
        let names = store
            .with_db(|db| async move {
                let stmt = Statement::from_string(
                    DatabaseBackend::Sqlite,
                    "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name".to_string(),
                );
                Ok(TableName::find_by_statement(stmt).all(&db).await?)
            })
            .await
            .unwrap();
        let names: Vec<String> = names.into_iter().map(|t| t.name).collect();
        for (table, _) in SCHEMA {
            assert!(names.contains(&table.to_string()), "missing {}", table);
        }
    }

    #[tokio::test]
    async fn test_with_db_forwards_errors() {
        let store = ReportStore::open("sqlite::memory:").await.unwrap();
        let result: anyhow::Result<()> = store
            .with_db(|_db| async move { Err(anyhow::anyhow!("Database error")) })
            .await;
        assert_eq!(result.unwrap_err().to_string(), "Database error");
    }

    #[tokio::test]
    async fn test_schema_bootstrap_is_idempotent() {
        let store = ReportStore::connect("sqlite::memory:").await.unwrap();
        store.ensure_schema().await.unwrap();
    }
}
