use clap::Parser;
use miette::{IntoDiagnostic, Result};
use remitquote::application::engine::QuoteEngine;
use remitquote::domain::money::{CountryCode, CurrencyCode};
use remitquote::domain::ports::{CorridorSourceBox, RateFeeProviderBox};
use remitquote::domain::quote::{CalculationBase, QuoteRequest};
use remitquote::error::QuoteError;
use remitquote::infrastructure::in_memory::{InMemoryCorridorSource, InMemoryRateFeeProvider};
use remitquote::interfaces::json::config::ReferenceConfig;
use remitquote::interfaces::json::quote_writer::QuoteWriter;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sending currency code (e.g. GBP)
    #[arg(long)]
    from_currency: String,

    /// Receiving currency code (e.g. EUR)
    #[arg(long)]
    to_currency: String,

    /// Sending country code (e.g. GB)
    #[arg(long)]
    from_country: String,

    /// Receiving country code (e.g. FR)
    #[arg(long)]
    to_country: String,

    /// Transfer amount
    #[arg(long)]
    amount: Decimal,

    /// Whether the amount is sent or received: sendAmount | receiveAmount
    #[arg(long, default_value = "sendAmount")]
    calculation_base: String,

    /// Reference data JSON file (optional). Uses the built-in demo corridors
    /// if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn build_request(cli: &Cli) -> std::result::Result<QuoteRequest, QuoteError> {
    QuoteRequest::new(
        CurrencyCode::new(&cli.from_currency)?,
        CurrencyCode::new(&cli.to_currency)?,
        CountryCode::new(&cli.from_country)?,
        CountryCode::new(&cli.to_country)?,
        cli.amount,
        cli.calculation_base.parse::<CalculationBase>()?,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("remitquote=debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = if let Some(path) = &cli.config {
        let file = File::open(path).into_diagnostic()?;
        ReferenceConfig::from_reader(file).into_diagnostic()?
    } else {
        ReferenceConfig::builtin()
    };
    let (corridors, tables) = config.build().into_diagnostic()?;
    tracing::debug!(corridors = corridors.len(), "reference data loaded");

    let corridor_source: CorridorSourceBox = Box::new(InMemoryCorridorSource::new(corridors));
    let provider: RateFeeProviderBox = Box::new(InMemoryRateFeeProvider::new(tables));
    let engine = QuoteEngine::new(corridor_source, provider);

    let stdout = io::stdout();
    let mut writer = QuoteWriter::new(stdout.lock());

    let outcome = match build_request(&cli) {
        Ok(request) => engine.quote(request).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(result) => {
            writer.write_quote(&result).into_diagnostic()?;
            Ok(())
        }
        Err(err) => {
            // The CLI analogue of the boundary's 422 mapping: a JSON body
            // with the message key, and a non-zero exit.
            writer.write_error(&err).into_diagnostic()?;
            std::process::exit(1);
        }
    }
}
