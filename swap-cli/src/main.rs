//! Swap CLI
//!
//! Command-line interface for looking up token prices and converting
//! amounts between tokens.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use swap_hex::{AbortSignal, ConversionService, abort};
use swap_prices::{FeedSource, HttpPriceSource, StaticPriceSource};
use swap_types::{ConvertError, ConvertRequest, ConvertResponse, PriceSource, token_prices};

const EXIT_OK: i32 = 0;
/// Exit status when a requested token has no usable price.
const EXIT_INVALID_PRICE: i32 = 2;

#[derive(Parser)]
#[command(name = "swap")]
#[command(author, version, about = "Token price lookup and conversion", long_about = None)]
struct Cli {
    /// URL of the token price feed
    #[arg(long, env = "TOKEN_PRICES_URL")]
    prices_url: Option<String>,

    /// Local JSON file to read prices from instead of a URL
    #[arg(long, env = "TOKEN_PRICES_FILE")]
    prices_file: Option<PathBuf>,

    /// Give up on the price feed after this many seconds
    #[arg(long, env = "PRICE_FETCH_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the latest price per currency
    Prices,
    /// Convert an amount from one currency to another
    Convert {
        /// Amount to send (at least 1)
        amount: f64,
        /// Currency to send
        #[arg(long)]
        from: String,
        /// Currency to receive
        #[arg(long)]
        to: String,
    },
}

fn build_source(cli: &Cli) -> Result<FeedSource> {
    if let Some(url) = &cli.prices_url {
        tracing::debug!(%url, timeout_secs = ?cli.timeout_secs, "Using HTTP price feed");
        let source = HttpPriceSource::new(url.clone());
        return Ok(match cli.timeout_secs {
            Some(secs) => source.with_timeout(Duration::from_secs(secs))?.into(),
            None => source.into(),
        });
    }
    if let Some(path) = &cli.prices_file {
        tracing::debug!(path = %path.display(), "Using price file");
        return Ok(StaticPriceSource::from_file(path.clone()).into());
    }
    anyhow::bail!("Either --prices-url or --prices-file is required")
}

/// Runs one command, writing results to `out`. Returns the process exit code.
async fn run<S: PriceSource>(
    command: Commands,
    service: &ConversionService<S>,
    signal: AbortSignal,
    out: &mut impl Write,
) -> Result<i32> {
    match command {
        Commands::Prices => {
            let table = service.prices_until(signal).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&token_prices(&table))?)?;
        }

        Commands::Convert { amount, from, to } => {
            let request = ConvertRequest {
                input_amount: amount,
                input_currency: from,
                output_currency: to,
            }
            .validate()?;

            match service.convert_until(&request, signal).await {
                Ok(result) => {
                    let response = ConvertResponse::new(request, result);
                    writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
                }
                Err(err @ ConvertError::InvalidTokenPrice { .. }) => {
                    tracing::debug!(error = ?err, "No usable price");
                    eprintln!("✗ {}", err);
                    return Ok(EXIT_INVALID_PRICE);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(EXIT_OK)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let service = ConversionService::new(build_source(&cli)?);

    // Ctrl+C abandons the in-flight fetch instead of killing the process mid-request.
    let (trigger, signal) = abort::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.abort();
        }
    });

    let code = run(cli.command, &service, signal, &mut std::io::stdout()).await?;
    if code != EXIT_OK {
        std::process::exit(code);
    }

    Ok(())
}
