//! Northbound CLI and HTTP chat endpoint.
//!
//! Binary name: `northbound`
//!
//! Parses CLI arguments, resolves configuration, wires the ZeroDB-backed chat
//! service and either starts the HTTP server or answers a one-off question.

mod cli;
mod http;
mod state;

use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands};
use northbound_infra::config::{DEFAULT_CONFIG_FILE, resolve_config};
use northbound_observe::tracing_setup::{init_tracing, shutdown_tracing};
use northbound_types::chat::MessageType;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,northbound=debug",
        _ => "trace",
    };
    init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = resolve_config(&config_path).await?;

    let result = match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(AppState::init(config)?, cli.quiet).await
        }

        Commands::Ask { message, rag } => {
            let mode = if rag {
                MessageType::Rag
            } else {
                MessageType::Chatbot
            };
            let state = AppState::init(config)?;
            let output = cli::ask::Output::from_flags(cli.json, cli.quiet);
            cli::ask::ask(&state, &message, mode, output).await
        }
    };

    shutdown_tracing();
    result
}

async fn serve(state: AppState, quiet: bool) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    if !quiet {
        println!();
        println!(
            "  {} Northbound chat listening on {}",
            console::style("▲").cyan().bold(),
            console::style(format!("http://{addr}")).underlined()
        );
        println!(
            "  {} corpus: {}",
            console::style("·").dim(),
            console::style(state.chat_service.responder().corpus()).yellow()
        );
        println!();
    }

    tracing::info!(%addr, "HTTP server started");

    let router = http::router::build_router(state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
