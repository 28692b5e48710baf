//! `mcp` - command line interface for the MCP gateway.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mcp_gateway_client::{Config, GatewayClient};

#[derive(Parser)]
#[command(name = "mcp", about = "Query the MCP gateway REST API", version)]
struct Cli {
    /// Gateway base URL, overrides the configured value.
    #[arg(long)]
    gateway_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show status for all active units
    Status,
    /// Send a prompt to the inference engine
    Infer { prompt: String },
    /// Show the last log lines for a unit
    Logs { unit: String },
    /// Show the rules overview
    Rules,
    /// Check a policy against the loaded rules
    Check { policy: String },
    /// Show the state snapshot for an area (e.g. memory, policy)
    State { area: String },
    /// Gateway health check
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = cli
        .gateway_url
        .as_deref()
        .unwrap_or(&config.gateway.base_url);
    tracing::debug!("Using gateway at {}", base_url);

    let client = GatewayClient::new(base_url);

    let value = match cli.command {
        Command::Status => client.status().await?,
        Command::Infer { prompt } => client.infer(&prompt).await?,
        Command::Logs { unit } => client.logs(&unit).await?,
        Command::Rules => client.rules().await?,
        Command::Check { policy } => client.check_policy(&policy).await?,
        Command::State { area } => client.state(&area).await?,
        Command::Health => client.health().await?,
    };

    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}
