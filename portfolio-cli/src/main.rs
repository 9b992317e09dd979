//! Portfolio CLI
//!
//! Values multi-currency portfolios against exchange rates given on the
//! command line.

mod args;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_hex::BankService;
use portfolio_repo::InMemoryBankRepo;
use portfolio_types::{
    AddExchangeRateRequest, AppError, ConvertRequest, CurrencyCode, EvaluatePortfolioRequest,
    SetupBankRequest,
};

use crate::args::{parse_currency, parse_money, parse_rate};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(author, version, about = "Multi-currency portfolio valuation", long_about = None)]
struct Cli {
    /// Log filter, e.g. `debug` (falls back to RUST_LOG, then PORTFOLIO_LOG)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value a portfolio in a single currency
    Evaluate {
        /// Exchange rate as FROM:TO:RATE (repeatable, first one sets up the bank)
        #[arg(long = "rate", required = true)]
        rates: Vec<String>,
        /// Portfolio line as AMOUNT:CURRENCY (repeatable)
        #[arg(long = "money", allow_hyphen_values = true)]
        lines: Vec<String>,
        /// Target currency (defaults to PORTFOLIO_CURRENCY or USD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Convert a single amount
    Convert {
        /// Exchange rate as FROM:TO:RATE (repeatable, first one sets up the bank)
        #[arg(long = "rate", required = true)]
        rates: Vec<String>,
        #[arg(long, allow_hyphen_values = true)]
        amount: f64,
        #[arg(long)]
        from: String,
        /// Target currency (defaults to PORTFOLIO_CURRENCY or USD)
        #[arg(long)]
        to: Option<String>,
    },
    /// List supported currencies
    Currencies,
}

fn init_tracing(config: &Config, cli_filter: Option<&str>) {
    let filter = match cli_filter {
        Some(filter) => tracing_subscriber::EnvFilter::new(filter),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.log_filter.as_str().into()),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            config
                .log_json
                .then(|| fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!config.log_json).then(|| fmt::layer().with_writer(std::io::stderr)),
        )
        .init();
}

/// Builds a service whose bank holds every `FROM:TO:RATE` in order.
fn build_service(rates: &[String]) -> Result<BankService<InMemoryBankRepo>> {
    let Some((first, rest)) = rates.split_first() else {
        anyhow::bail!("At least one --rate is required");
    };

    let service = BankService::new(InMemoryBankRepo::new());

    let (from, to, rate) = parse_rate(first)?;
    service.setup_bank(SetupBankRequest { from, to, rate })?;

    for spec in rest {
        let (from, to, rate) = parse_rate(spec)?;
        service.add_exchange_rate(AddExchangeRateRequest { from, to, rate })?;
    }

    tracing::debug!(rates = rates.len(), "bank ready");
    Ok(service)
}

fn target_currency(to: Option<&str>, config: &Config) -> Result<CurrencyCode> {
    to.map_or(Ok(config.default_currency), parse_currency)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(&config, cli.log.as_deref());

    match cli.command {
        Commands::Evaluate { rates, lines, to } => {
            let service = build_service(&rates)?;
            let lines = lines
                .iter()
                .map(|line| parse_money(line))
                .collect::<Result<Vec<_>>>()?;
            let to = target_currency(to.as_deref(), &config)?;

            match service.evaluate(EvaluatePortfolioRequest { lines, to }) {
                Ok(valuation) => println!("{}", serde_json::to_string_pretty(&valuation)?),
                Err(AppError::MissingExchangeRates(missing)) => {
                    eprintln!("✗ {}", missing);
                    println!("{}", serde_json::to_string_pretty(&missing)?);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Convert {
            rates,
            amount,
            from,
            to,
        } => {
            let service = build_service(&rates)?;
            let currency = parse_currency(&from)?;
            let to = target_currency(to.as_deref(), &config)?;

            match service.convert(ConvertRequest {
                amount,
                currency,
                to,
            }) {
                Ok(money) => println!("{}", serde_json::to_string_pretty(&money)?),
                Err(AppError::MissingExchangeRate(missing)) => {
                    eprintln!("✗ Missing exchange rate: {}", missing);
                    println!("{}", serde_json::to_string_pretty(&missing)?);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Currencies => {
            let currencies: Vec<_> = CurrencyCode::all()
                .iter()
                .map(|c| serde_json::json!({ "code": c.code(), "symbol": c.symbol() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&currencies)?);
        }
    }

    Ok(())
}
