mod config;
mod engine;
mod ledger;
mod models;
mod rates;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Settings;
use crate::engine::{CommissionEngine, Pipeline};
use crate::ledger::WeeklyLedger;
use crate::rates::{CurrencyConverter, FetchOutcome, HttpRateSource, RateProvider};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: commission-calculator [input].csv [log_level:optional] > [fees].txt");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let settings = Settings::from_env()?;
    let provider = load_rates(&settings).await?;

    let engine = CommissionEngine::new(CurrencyConverter::new(provider.rates().clone()), WeeklyLedger::new());
    let mut pipeline = Pipeline::new(engine);
    let mut output = BufWriter::new(stdout().lock());

    let timer = Instant::now();
    let result = pipeline.run(path, &mut output).await;
    output.flush()?;
    let processed = result?;
    let duration = timer.elapsed();

    info!("Processed {processed} operations in: {duration:?}");
    info!("Tracked withdrawals for {} client weeks", pipeline.engine().ledger().len());

    Ok(())
}

async fn load_rates(settings: &Settings) -> Result<RateProvider> {
    let source = HttpRateSource::new(settings.rates_url.as_str(), settings.rates_timeout)?;
    let (provider, outcome) = RateProvider::initialize(&source, settings.fallback_rates.clone()).await;

    match outcome {
        FetchOutcome::Fetched { currencies } => {
            info!("Fetched {currencies} exchange rates from {}", source.url());
        },
        FetchOutcome::Fallback(error) if provider.rates().is_empty() => {
            warn!("Could not fetch latest exchange rates and no fallback rates are set, amounts count as EUR: {error}");
        },
        FetchOutcome::Fallback(error) => {
            warn!("Could not fetch latest exchange rates, using {} fallback rates: {error}", provider.rates().len());
        }
    }

    Ok(provider)
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
