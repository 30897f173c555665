pub mod dashboards;
pub mod handlers;
pub mod reports;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    use shared::config::{load_config, resolve_path};

    let (config, config_source) = load_config()?;

    system::tracing::initialize(&resolve_path(&config.logging.dir))?;
    tracing::info!("Configuration loaded from {}", config_source);

    let store = shared::data::db::initialize_database(&resolve_path(&config.database.path))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    if config.data.seed_sample_data {
        shared::data::seed::seed_sample_data(&store).await?;
    }

    let static_dir = config.server.static_dir.as_deref().map(resolve_path);
    let app = routes::configure_routes(store, static_dir);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
