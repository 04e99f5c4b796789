use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use verba_config::{Config, StoreBackend};

pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;


use self::state::AppState;

/// Word translation lookup service
#[derive(Parser, Debug)]
#[command(name = "verba", version, about)]
struct Cli {
    /// Dotenv file to load before reading the environment
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Listen address, overrides BIND_ADDR
    #[arg(long)]
    bind: Option<String>,

    /// Store backend (memory or mongo), overrides STORE_BACKEND
    #[arg(long)]
    store: Option<String>,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(bind) = &self.bind {
            config.server.bind_addr = bind.clone();
        }

        if let Some(store) = &self.store {
            config.store.backend = StoreBackend::from_name(store)
                .with_context(|| format!("unknown store backend: {store}"))?;
        }

        if self.log_json {
            config.server.log_json = true;
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_file = verba_config::load_dotenv(cli.env_file.as_deref());
    let mut config = Config::new();
    cli.apply(&mut config)?;

    logging::init(config.server.log_json, config.app.debug);
    if let Some(path) = env_file {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let state = Arc::new(AppState::build(config).await?);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
        }
    };

    run(state, shutdown).await
}

pub async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
    let bind_addr = state.config.server.bind_addr.clone();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(
        "{} {} listening on {}",
        state.config.app.title,
        state.config.app.version,
        listener.local_addr()?
    );

    let cancel = CancellationToken::new();
    let app = routes::router(state);

    let mut server = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(cancel.cancelled_owned())
                .await
        }
    });

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = &mut server => {
            match result {
                Ok(Ok(())) => tracing::warn!("server task exited"),
                Ok(Err(e)) => tracing::error!("server exited: {e}"),
                Err(e) => tracing::error!("server task panicked: {e}"),
            }
            return Ok(());
        }
    }

    cancel.cancel();
    server.await??;
    tracing::info!("Server stopped");

    Ok(())
}
