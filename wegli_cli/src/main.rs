mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wegli_api::http::DefaultRequestFactory;
use wegli_api::{Client, ReqwestTransport, DEFAULT_BASE_URL};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "wegli")]
#[command(about = "Query charges, districts and your own notices on weg.li")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    /// API key sent as X-API-KEY (needed for notices)
    #[arg(long, env = "WEGLI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Base URL of the weg.li instance
    #[arg(long, env = "WEGLI_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or look up charges from the offence catalogue
    Charges(commands::charges::ChargesArgs),
    /// List or look up your own notices
    Notices(commands::notices::NoticesArgs),
    /// List or look up districts
    Districts(commands::districts::DistrictsArgs),
}

fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("wegli=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let transport = ReqwestTransport::new().context("failed to build HTTP client")?;
    let mut client = Client::with_base_url(transport, DefaultRequestFactory, &cli.base_url)
        .with_context(|| format!("invalid base URL '{}'", cli.base_url))?;
    if let Some(key) = &cli.api_key {
        client.authenticate(key.as_str());
    }

    match &cli.command {
        Commands::Charges(args) => commands::charges::run(args, &client, &cli.output)?,
        Commands::Notices(args) => commands::notices::run(args, &client, &cli.output)?,
        Commands::Districts(args) => commands::districts::run(args, &client, &cli.output)?,
    }

    Ok(())
}
