use super::ui;
use crate::core::config::AppConfig;
use crate::core::stats::{CategoryStats, category_stats};
use crate::core::{Dataset, FundRecord, Period};
use anyhow::{Result, anyhow};
use comfy_table::Cell;

fn profile_table(fund: &FundRecord) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Item"), ui::header_cell("Value")]);
    let rows: Vec<(&str, String)> = vec![
        ("Fund ID", fund.id.clone()),
        ("Type", fund.asset_class.to_string()),
        ("Category", fund.category.clone()),
        ("Issuer", fund.issuer.clone()),
        ("Area", fund.area.clone()),
        ("Risk level", ui::risk_label(fund.risk_level)),
        ("Dividend", fund.dividend_frequency.to_string()),
        (
            "Cost/value score",
            fund.cost_performance
                .map_or("N/A".to_string(), |v| format!("{v:.2}")),
        ),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table.to_string()
}

fn performance_table(fund: &FundRecord) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Period"), ui::header_cell("Return")]);
    for period in Period::ALL {
        table.add_row(vec![
            Cell::new(period.label()),
            ui::return_cell(fund.period_return(period)),
        ]);
    }
    table.to_string()
}

fn risk_table(fund: &FundRecord) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Measure"), ui::header_cell("Value")]);
    table.add_row(vec![
        Cell::new("Annualized std dev"),
        ui::format_optional_cell(fund.volatility, |v| format!("{v:.2}%")),
    ]);
    if let Some(sharpe) = fund.sharpe_ratio {
        table.add_row(vec![Cell::new("Sharpe ratio"), Cell::new(format!("{sharpe:.2}"))]);
    }
    if let Some(dividend_yield) = fund.dividend_yield {
        table.add_row(vec![
            Cell::new("Annualized dividend yield"),
            Cell::new(format!("{dividend_yield:.2}%")),
        ]);
    }
    if let Some(dividend_return) = fund.dividend_return {
        table.add_row(vec![
            Cell::new("Annualized dividend return"),
            Cell::new(format!("{dividend_return:.2}%")),
        ]);
    }
    table.to_string()
}

fn holdings_table(fund: &FundRecord) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Stock"), ui::header_cell("Weight")]);
    for holding in &fund.holdings {
        table.add_row(vec![
            Cell::new(&holding.stock_name),
            Cell::new(ui::weight_text(holding.weight)),
        ]);
    }
    table.to_string()
}

fn category_section(stats: &CategoryStats) -> String {
    let mut output = format!(
        "This fund belongs to the \"{}\" category of {} funds.\n\n",
        stats.category, stats.total_in_category
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Period"),
        ui::header_cell("Fund"),
        ui::header_cell("Peer average"),
        ui::header_cell("Rank"),
        ui::header_cell("Percentile"),
    ]);
    for ranking in &stats.rankings {
        let (Some(rank), Some(percentile)) = (ranking.rank, ranking.percentile) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(ranking.period.label()),
            ui::return_cell(ranking.fund_return),
            ui::return_cell(ranking.peer_average),
            Cell::new(format!("{rank}/{}", ranking.peers_with_value)),
            Cell::new(format!("top {percentile}%")),
        ]);
    }
    output.push_str(&table.to_string());

    if let Some(risk) = &stats.risk {
        output.push_str(&format!(
            "\n\nVolatility: {:.2}% vs peer average {:.2}% ({})",
            risk.fund_volatility, risk.peer_average_volatility, risk.band
        ));
    }
    output
}

pub fn render(dataset: &Dataset, config: &AppConfig, fund: &FundRecord) -> String {
    let stats = category_stats(dataset, fund);
    let mut sections = vec![
        ui::style_text(&fund.name, ui::StyleType::Title),
        format!("{}\n{}", ui::style_text("Profile", ui::StyleType::Label), profile_table(fund)),
        format!(
            "{}\n{}",
            ui::style_text("Performance", ui::StyleType::Label),
            performance_table(fund)
        ),
        format!("{}\n{}", ui::style_text("Risk", ui::StyleType::Label), risk_table(fund)),
    ];
    if !fund.holdings.is_empty() {
        sections.push(format!(
            "{}\n{}",
            ui::style_text("Top holdings", ui::StyleType::Label),
            holdings_table(fund)
        ));
    }
    sections.push(format!(
        "{}\n{}",
        ui::style_text("Category comparison", ui::StyleType::Label),
        category_section(&stats)
    ));
    sections.push(ui::style_text(
        &format!("More: {}", config.fund_url(&fund.id)),
        ui::StyleType::Subtle,
    ));
    sections.join("\n\n")
}

pub fn run(dataset: &Dataset, config: &AppConfig, id: &str) -> Result<()> {
    let fund = dataset
        .get(id)
        .ok_or_else(|| anyhow!("Fund {id} not found, check the identifier"))?;
    println!("{}", render(dataset, config, fund));
    Ok(())
}
