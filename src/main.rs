//! Heartbeat: an HTTP liveness service.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration, initializes tracing, binds the listener and serves the
//! router. Any startup failure is logged and the process exits with status 1.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use heartbeat::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER, PORT_ENV_VAR};
use heartbeat::create_router;

/// Heartbeat: a minimal HTTP liveness service
#[derive(Parser, Debug)]
#[command(name = "heartbeat", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "heartbeat=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listen port, overrides PORT and the configuration file
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let config = match AppConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&log_filter, LogFormat::default());
            tracing::error!(error = %e, path = ?args.config, "Failed to load configuration");
            return ExitCode::from(1);
        }
    };

    let env_port = std::env::var(PORT_ENV_VAR).ok();
    let config = config.with_port_overrides(args.port, env_port.as_deref());

    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();

    match heartbeat::http::start_server(app, &config.http).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, detail = ?e, "Server failed");
            ExitCode::from(1)
        }
    }
}
