use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use fundlens::core::fund::{RISK_MAX, RISK_MIN};
use fundlens::core::holding::DEFAULT_LIMIT;
use fundlens::core::log::init_logging;
use fundlens::core::{AssetClass, DividendFrequency, Period, ReturnRange, SearchCriteria};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Fund type, e.g. 股票型 or equity
    #[arg(short = 't', long = "type")]
    asset_class: Option<AssetClass>,

    /// Exact risk level (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range((RISK_MIN as i64)..=(RISK_MAX as i64)))]
    risk: Option<u8>,

    /// Highest acceptable risk level (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range((RISK_MIN as i64)..=(RISK_MAX as i64)))]
    max_risk: Option<u8>,

    /// Investment area, matched as a substring
    #[arg(long)]
    area: Option<String>,

    /// Name category, matched exactly
    #[arg(long)]
    category: Option<String>,

    /// Dividend frequency, e.g. 月配息 or monthly
    #[arg(long)]
    dividend: Option<DividendFrequency>,

    /// Trading type tag the fund must support
    #[arg(long)]
    trading_type: Option<String>,
}

impl FilterArgs {
    fn into_criteria(self, keyword: Option<String>) -> SearchCriteria {
        SearchCriteria {
            keyword,
            asset_class: self.asset_class,
            risk_level: self.risk,
            max_risk_level: self.max_risk,
            area: self.area,
            category: self.category,
            dividend_frequency: self.dividend,
            trading_type: self.trading_type,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Search funds by keyword and filters
    Search {
        /// Matches fund name, issuer or identifier
        keyword: Option<String>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Rank funds by a performance metric
    Top {
        /// One of 3m 6m 1y 2y 3y 5y sharpe dividendYield stddev
        #[arg(short, long)]
        metric: Option<String>,
        /// Number of funds to show (1-20)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Period the return bounds apply to
        #[arg(long, default_value = "1y")]
        range_period: Period,
        /// Lowest acceptable return, in percent
        #[arg(long, allow_negative_numbers = true)]
        min_return: Option<f64>,
        /// Highest acceptable return, in percent
        #[arg(long, allow_negative_numbers = true)]
        max_return: Option<f64>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show everything known about one fund
    Detail { id: String },
    /// Compare 2 to 5 funds side by side
    Compare {
        #[arg(num_args = 2..=5, required = true)]
        ids: Vec<String>,
    },
    /// Analyse shared holdings between 2 to 5 funds
    Overlap {
        #[arg(num_args = 2..=5, required = true)]
        ids: Vec<String>,
    },
    /// Suggest fund types that complement a fund
    Complement { id: String },
    /// Find funds holding given stocks (comma separated)
    Holding {
        stocks: String,
        #[arg(short = 't', long = "type")]
        asset_class: Option<AssetClass>,
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}

impl From<Commands> for fundlens::AppCommand {
    fn from(cmd: Commands) -> fundlens::AppCommand {
        match cmd {
            Commands::Search { keyword, filters } => fundlens::AppCommand::Search {
                criteria: filters.into_criteria(keyword),
            },
            Commands::Top {
                metric,
                limit,
                range_period,
                min_return,
                max_return,
                filters,
            } => {
                let range = (min_return.is_some() || max_return.is_some()).then_some(ReturnRange {
                    period: range_period,
                    min: min_return,
                    max: max_return,
                });
                fundlens::AppCommand::Top {
                    filters: filters.into_criteria(None),
                    metric,
                    range,
                    limit,
                }
            }
            Commands::Detail { id } => fundlens::AppCommand::Detail { id },
            Commands::Compare { ids } => fundlens::AppCommand::Compare { ids },
            Commands::Overlap { ids } => fundlens::AppCommand::Overlap { ids },
            Commands::Complement { id } => fundlens::AppCommand::Complement { id },
            Commands::Holding {
                stocks,
                asset_class,
                limit,
            } => fundlens::AppCommand::Holding {
                stocks,
                asset_class,
                limit,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fundlens::cli::setup::setup(),
        Some(cmd) => fundlens::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
