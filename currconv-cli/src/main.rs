//! Currency converter CLI
//!
//! Command-line interface for the currency converter API.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use currconv_client::{ApiClient, Config, DEFAULT_BASE_URL, DEFAULT_VERSION};
use currconv_types::{ConvertHistoricalRequest, ConvertRequest};

#[derive(Parser)]
#[command(name = "currconv")]
#[command(author, version, about = "Currency converter API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the currency converter API
    #[arg(long, env = "CURRCONV_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// API version placed after `/api`
    #[arg(long, env = "CURRCONV_API_VERSION", default_value = DEFAULT_VERSION)]
    api_version: String,

    /// API key for authentication
    #[arg(long, env = "CURRCONV_API_KEY", hide_env_values = true)]
    api_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Latest conversion rates
    Convert {
        /// Pairs in FROM_TO format, e.g. USD_MYR
        #[arg(required = true)]
        pairs: Vec<String>,
        /// Print a flat pair -> rate map
        #[arg(long)]
        compact: bool,
    },
    /// Historical conversion rates for a date or date range
    Historical {
        /// Pairs in FROM_TO format, e.g. USD_MYR
        #[arg(required = true)]
        pairs: Vec<String>,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Last day of the range (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,
        /// Print a flat pair -> date -> rate map
        #[arg(long)]
        compact: bool,
    },
    /// List supported currencies
    Currencies,
    /// List supported countries
    Countries,
    /// Show usage of the API key
    Usage,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.base_url, cli.api_version, cli.api_key);
    tracing::debug!(?config, "using configuration");
    let client = ApiClient::new(config);

    match cli.command {
        Commands::Convert { pairs, compact } => {
            let req = ConvertRequest::new(pairs);
            if compact {
                print_json(&client.convert_compact(&req).await?)?;
            } else {
                print_json(&client.convert(&req).await?)?;
            }
        }

        Commands::Historical {
            pairs,
            date,
            end_date,
            compact,
        } => {
            let req = ConvertHistoricalRequest {
                pairs,
                date: Some(date),
                end_date,
            };
            if compact {
                print_json(&client.convert_historical_compact(&req).await?)?;
            } else {
                print_json(&client.convert_historical(&req).await?)?;
            }
        }

        Commands::Currencies => print_json(&client.currencies().await?)?,
        Commands::Countries => print_json(&client.countries().await?)?,
        Commands::Usage => print_json(&client.usage().await?)?,
    }

    Ok(())
}
