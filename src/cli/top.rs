use super::{search::funds_table, ui};
use crate::core::config::AppConfig;
use crate::core::ranking::top_performers_by_key;
use crate::core::{Dataset, FundRecord, Metric, ReturnRange, SearchCriteria};
use anyhow::Result;
use tracing::info;

/// Largest ranking the command line will show.
pub const MAX_LIMIT: usize = 20;

pub fn render(results: &[&FundRecord], metric_key: &str, filters: &SearchCriteria) -> String {
    if results.is_empty() {
        return "No funds match the ranking criteria.".to_string();
    }

    let metric_label = metric_key
        .parse::<Metric>()
        .map(|m| m.label())
        .unwrap_or_else(|_| metric_key.to_string());
    let scope = match (&filters.asset_class, &filters.category) {
        (Some(asset_class), Some(category)) => format!("{asset_class} / {category}"),
        (Some(asset_class), None) => asset_class.to_string(),
        (None, Some(category)) => category.clone(),
        (None, None) => "All funds".to_string(),
    };

    format!(
        "{}\n\nTop {}:\n\n{}",
        ui::style_text(
            &format!("Fund ranking: {scope} (by {metric_label})"),
            ui::StyleType::Title
        ),
        results.len(),
        funds_table(results, true)
    )
}

pub fn run(
    dataset: &Dataset,
    config: &AppConfig,
    filters: &SearchCriteria,
    metric: Option<&str>,
    range: Option<&ReturnRange>,
    limit: Option<usize>,
) -> Result<()> {
    let metric_key = metric.unwrap_or(config.ranking.default_metric.as_str());
    let limit = limit
        .unwrap_or(config.ranking.default_limit)
        .clamp(1, MAX_LIMIT);
    info!("Ranking by {metric_key}, limit {limit}");

    let results = top_performers_by_key(dataset, filters, metric_key, range, limit);
    println!("{}", render(&results, metric_key, filters));
    Ok(())
}
