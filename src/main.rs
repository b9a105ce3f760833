// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_relay::{build_router, AppState, CommandLineInput, NotionHttpClient, ServerConfig};
use std::path::Path;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool, log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let pattern = "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}";

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let mut config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)));
    let mut root = Root::builder().appender("stdout");

    if let Some(path) = log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file_appender = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(pattern)))
            .build(path)?;
        config = config.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        );
        root = root.appender("file");
    }

    log4rs::init_config(config.build(root.build(log_level))?)?;
    if let Some(path) = log_file {
        log::info!("Logging initialized. Log file: {}", path.display());
    }
    Ok(())
}

/// Binds the listener and serves the relay until Ctrl-C.
async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    log::info!(
        "Notion token: {}",
        if config.credentials.is_configured() {
            "set"
        } else {
            "not set"
        }
    );

    let notion = NotionHttpClient::with_base_url(&config.credentials, &config.notion_api_url)?;
    let state = AppState::new(Arc::new(notion), &config.credentials);
    let app = build_router(state, config.shape);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    log::info!(
        "Relay running on http://{} ({:?} shape, upstream {})",
        config.listen_addr,
        config.shape,
        config.notion_api_url
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated unexpectedly")?;

    log::info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let config = ServerConfig::resolve(cli)?;

    serve(config).await
}
