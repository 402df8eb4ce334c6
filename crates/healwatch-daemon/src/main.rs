//! HealWatch Daemon - Selector healing backend
//!
//! The daemon provides:
//! - Single element healing (`POST /api/heal-element`)
//! - Suite runs (`POST /api/test-healing`) and their latest results
//!   (`GET /api/test-results`)
//! - Health reporting (`GET /api/health`)

use clap::Parser;
use healwatch_daemon::error::{DaemonError, DaemonResult};
use healwatch_daemon::{DaemonConfig, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// HealWatch Daemon CLI
#[derive(Parser)]
#[command(name = "healwatchd")]
#[command(about = "HealWatch Daemon - Selector healing backend", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "HEALWATCHD_CONFIG")]
    config: Option<String>,

    /// Listen address (overrides the configuration file)
    #[arg(short, long, env = "HEALWATCHD_LISTEN_ADDR")]
    listen: Option<String>,

    /// JSON file of test cases to run instead of the built-in suite
    #[arg(short, long, env = "HEALWATCHD_SUITE_PATH")]
    suite: Option<String>,

    /// Log level
    #[arg(long, env = "HEALWATCHD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "HEALWATCHD_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = DaemonConfig::load(cli.config.as_deref())
        .map_err(|e| DaemonError::Config(e.to_string()))?;

    // Override with CLI args
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(suite) = cli.suite {
        config.suite.path = Some(suite.into());
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

    println!(
        r#"
  HealWatch - Selector Healing Backend
  Version: {}
  Listening: {}
"#,
        env!("CARGO_PKG_VERSION"),
        config.server.listen_addr
    );

    let server = Server::new(config)?;
    server.run().await
}
