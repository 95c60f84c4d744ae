use std::net::SocketAddr;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{info, warn};

mod cli;

use cli::Cli;
use yttd::config::Config;
use yttd::server::{AppState, router};
use yttd::ytdlp;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();

    // Config file is optional; flags override whatever it provides
    let config = Config::load().unwrap_or_default();
    let config = cli.apply(config);

    match ytdlp::version().await {
        Some(v) => info!("yt-dlp {v} found, subtitle fallback enabled"),
        None => warn!("yt-dlp not found on PATH; subtitle fallback will be unavailable"),
    }

    let addr: SocketAddr = format!("{}:{}", config.host(), config.port())
        .parse()
        .wrap_err("invalid listen address")?;

    let state = AppState::new(config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("binding to {addr}"))?;
    info!("Transcript server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("running transcript server")?;

    Ok(())
}

async fn shutdown_signal() {
    // Only affects graceful shutdown; the process still terminates when
    // Ctrl+C fires.
    if let Err(err) = tokio::signal::ctrl_c().await {
        eprintln!("Failed to install Ctrl+C handler: {err}");
    }
}
