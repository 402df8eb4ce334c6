//! HealWatch CLI - Terminal dashboard for selector healing results
//!
//! This CLI lets test engineers:
//! - Watch healing results refresh on a fixed interval
//! - Fetch the latest results once, as a table, JSON or YAML
//! - Heal a single element against the daemon
//! - Check daemon connectivity

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod client;
mod commands;
mod config;
mod dashboard;
mod error;
mod output;

use client::HealwatchClient;
use commands::{heal, results, watch};
use config::CliConfig;
use error::CliResult;
use healwatch_monitor::{FetchMode, SourceKind};
use output::{print_error, print_single, print_success, OutputFormat};

/// HealWatch CLI application
#[derive(Parser)]
#[command(name = "healwatch")]
#[command(about = "HealWatch - Selector healing results dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "HEALWATCH_CONFIG")]
    config: Option<String>,

    /// HealWatch daemon endpoint [default: http://localhost:8000]
    #[arg(short, long, env = "HEALWATCH_ENDPOINT")]
    endpoint: Option<String>,

    /// Where results come from (live, mock)
    #[arg(long, env = "HEALWATCH_SOURCE")]
    source: Option<SourceKind>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Live dashboard, refreshed on an interval
    Watch {
        /// Seconds between refreshes
        #[arg(short, long)]
        interval: Option<u64>,

        /// Run the suite on each refresh, or read the latest run (run, latest)
        #[arg(short, long)]
        mode: Option<FetchMode>,
    },

    /// Fetch results once
    Results {
        /// Read the latest run, or run the suite (latest, run)
        #[arg(short, long, default_value = "latest")]
        mode: FetchMode,
    },

    /// Run the healing suite once and show its results
    Run,

    /// Heal a single element
    Heal(heal::HealArgs),

    /// Check daemon connectivity
    Status,

    /// Show resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so rendered output stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Load config, flags win over the file
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.source.endpoint = endpoint;
    }
    if let Some(kind) = cli.source {
        config.source.kind = kind;
    }

    match cli.command {
        Commands::Watch { interval, mode } => {
            if let Some(mode) = mode {
                config.source.mode = mode;
            }
            if let Some(interval) = interval {
                config.poll.interval_secs = interval;
            }
            let source = config.source.build()?;
            watch::execute(source, config.poll, cli.output).await
        }
        Commands::Results { mode } => {
            config.source.mode = mode;
            let source = config.source.build()?;
            results::execute(source.as_ref(), cli.output).await
        }
        Commands::Run => {
            config.source.mode = FetchMode::Run;
            let source = config.source.build()?;
            results::execute(source.as_ref(), cli.output).await
        }
        Commands::Heal(args) => {
            let client = HealwatchClient::new(&config.source.endpoint, config.source.timeout())?;
            heal::execute(args, &client, cli.output).await
        }
        Commands::Status => {
            let client = HealwatchClient::new(&config.source.endpoint, config.source.timeout())?;
            match client.health_check().await {
                Ok(health) => match cli.output {
                    OutputFormat::Table => {
                        print_success("HealWatch daemon is healthy");
                        println!("  Endpoint:   {}", config.source.endpoint);
                        println!("  Version:    {}", health.version);
                        println!("  Uptime:     {}", health.uptime);
                        println!("  Suite size: {}", health.suite_size);
                        println!(
                            "  Results:    {}",
                            if health.has_results { "available" } else { "none yet" }
                        );
                        Ok(())
                    }
                    format => print_single(&health, format),
                },
                Err(e) => {
                    print_error(&format!(
                        "Cannot connect to HealWatch daemon at {}: {}",
                        config.source.endpoint, e
                    ));
                    Err(e)
                }
            }
        }
        Commands::Config => match cli.output {
            OutputFormat::Table => {
                print!("{}", config.to_toml()?);
                Ok(())
            }
            format => print_single(&config, format),
        },
    }
}
