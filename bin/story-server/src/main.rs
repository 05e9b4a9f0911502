//! story-server: HTTP backend for the creative-writing assistant.
//!
//! Configuration is read (with `.env` merged in) before tracing starts, so a
//! missing `GEMINI_API_KEY` is reported on stderr and nothing binds.

mod cli;
mod config;
mod error;
mod middleware;
mod routes;
mod schemas;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use story_gemini::{GeminiClient, GenerateContent};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = Config::from_env()?;
    if let Some(bind) = cli.bind {
        cfg.bind_address = bind;
    }

    init_tracing(&cfg);

    info!(version = env!("CARGO_PKG_VERSION"), model = %cfg.gemini_model, "story-server starting");

    let model: Arc<dyn GenerateContent> = Arc::new(GeminiClient::with_base_url(
        cfg.gemini_api_key.clone(),
        cfg.gemini_base_url.clone(),
    ));
    let state = Arc::new(AppState {
        config: Arc::new(cfg.clone()),
        model,
    });

    if let Some(Command::Probe { prompt }) = cli.command {
        let reply = cli::probe(&state, &prompt).await?;
        println!("{reply}");
        return Ok(());
    }

    let app = routes::build(Arc::clone(&state));
    let addr: SocketAddr = cfg.bind_address.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("story-server stopped");
    Ok(())
}

/// `RUST_LOG` wins over `STORY_LOG`; an unparseable filter falls back to `info`.
fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_level))
        .unwrap_or_else(|e| {
            eprintln!("STORY_LOG='{}' is not a valid tracing filter ({e}); using 'info'", cfg.log_level);
            EnvFilter::new("info")
        });

    let fmt = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if cfg.log_json {
        fmt.json().init();
    } else {
        fmt.init();
    }
}

/// Resolves on SIGINT (Ctrl-C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
