//! webdemo daemon - demo web service
//!
//! Serves the data endpoints under `/data` and the rendered user page at
//! `/user`.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webdemo_server::{Server, ServerError, ServerResult, ServiceConfig};

/// webdemo daemon CLI
#[derive(Parser)]
#[command(name = "webdemod")]
#[command(about = "webdemo - Demo web service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "WEBDEMO_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "WEBDEMO_LISTEN_ADDR")]
    listen: Option<String>,

    /// Application instance id
    #[arg(long, env = "WEBDEMO_APP_ID")]
    app_id: Option<String>,

    /// Log level
    #[arg(long, env = "WEBDEMO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(
        long,
        env = "WEBDEMO_LOG_JSON",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    json: bool,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = ServiceConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(app_id) = cli.app_id {
        config.app.id = Some(app_id);
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        "Starting webdemo"
    );

    Server::new(config).run().await
}
