use std::net::{IpAddr, SocketAddr};

use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use placement_api::config::ServerConfig;
use placement_api::router::build_app_router;
use placement_api::state::AppState;
use placement_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "placement_api=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        static_dir = %config.static_dir.display(),
        request_timeout_secs = config.request_timeout_secs,
        "Configuration loaded"
    );

    let pool = open_store().await;
    let app = build_app_router(AppState { pool: pool.clone() }, &config);

    let ip: IpAddr = config
        .host
        .parse()
        .unwrap_or_else(|e| panic!("HOST {:?} is not an IP address: {e}", config.host));
    let addr = SocketAddr::new(ip, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot bind {addr}: {e}"));
    tracing::info!(%addr, "Listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server terminated abnormally");
    }

    pool.close().await;
    tracing::info!("Connection pool closed, exiting");
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to `DATABASE_URL`, verify the connection and bring the schema
/// up to date. Any failure here is fatal.
async fn open_store() -> DbPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = placement_db::create_pool(&url)
        .await
        .unwrap_or_else(|e| panic!("Cannot connect to the database: {e}"));
    placement_db::health_check(&pool)
        .await
        .unwrap_or_else(|e| panic!("Database did not answer SELECT 1: {e}"));
    placement_db::run_migrations(&pool)
        .await
        .unwrap_or_else(|e| panic!("Migrations failed: {e}"));

    tracing::info!("Database ready");
    pool
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = match signal(SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable, waiting for Ctrl-C only");
                wait_for_ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = wait_for_ctrl_c() => {}
            _ = term.recv() => tracing::info!("SIGTERM received, draining connections"),
        }
    }

    #[cfg(not(unix))]
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Ctrl-C received, draining connections"),
        Err(e) => {
            tracing::warn!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}
