pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::{AssetClass, ReturnRange, SearchCriteria};
use crate::store::{json::JsonFileSource, load_dataset};
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Search {
        criteria: SearchCriteria,
    },
    Top {
        filters: SearchCriteria,
        metric: Option<String>,
        range: Option<ReturnRange>,
        limit: Option<usize>,
    },
    Detail {
        id: String,
    },
    Compare {
        ids: Vec<String>,
    },
    Overlap {
        ids: Vec<String>,
    },
    Complement {
        id: String,
    },
    Holding {
        stocks: String,
        asset_class: Option<AssetClass>,
        limit: usize,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fundlens starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let source = JsonFileSource::new(config.dataset_path()?);
    let spinner = cli::ui::new_spinner("Loading fund catalog...");
    let loaded = load_dataset(&source);
    spinner.finish_and_clear();
    let dataset = loaded?;

    match command {
        AppCommand::Search { criteria } => cli::search::run(&dataset, &config, &criteria),
        AppCommand::Top {
            filters,
            metric,
            range,
            limit,
        } => cli::top::run(
            &dataset,
            &config,
            &filters,
            metric.as_deref(),
            range.as_ref(),
            limit,
        ),
        AppCommand::Detail { id } => cli::detail::run(&dataset, &config, &id),
        AppCommand::Compare { ids } => cli::compare::run(&dataset, &config, &ids),
        AppCommand::Overlap { ids } => cli::overlap::run(&dataset, &config, &ids),
        AppCommand::Complement { id } => cli::complement::run(&dataset, &config, &id),
        AppCommand::Holding {
            stocks,
            asset_class,
            limit,
        } => cli::holding::run(&dataset, &stocks, asset_class, limit),
    }
}
