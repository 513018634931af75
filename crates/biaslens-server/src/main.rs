mod api;
mod history;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use biaslens_analysis::{BiasAnalyzer, OpenAiOracle};
use biaslens_extract::PageClient;

use crate::api::{build_app, AppState};
use crate::history::HistoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = biaslens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let oracle = OpenAiOracle::new(&config.openai_api_key, &config.oracle_model)
        .with_base_url(&config.oracle_base_url);
    let page_client = PageClient::new(config.fetch_timeout_secs, &config.fetch_user_agent)?;
    let analyzer = BiasAnalyzer::new(Box::new(oracle), page_client, config.oracle_temperature);

    let state = AppState {
        analyzer: Arc::new(analyzer),
        history: Arc::new(HistoryStore::new(config.history_path.clone())),
    };
    let app = build_app(state);

    tracing::info!(addr = %config.bind_addr, "starting biaslens server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
