use super::ui;
use crate::core::config::AppConfig;
use crate::core::{Dataset, FundRecord, Period, SearchCriteria, search};
use anyhow::Result;
use comfy_table::{Cell, Table};

/// Builds the standard fund list table, numbered when `numbered` is set.
pub fn funds_table(funds: &[&FundRecord], numbered: bool) -> Table {
    let mut table = ui::new_styled_table();
    let mut header = Vec::new();
    if numbered {
        header.push(ui::header_cell("#"));
    }
    header.extend([
        ui::header_cell("Fund"),
        ui::header_cell("Type"),
        ui::header_cell("Category"),
        ui::header_cell("Risk"),
        ui::header_cell("Area"),
        ui::header_cell("Dividend"),
        ui::header_cell("1Y"),
        ui::header_cell("3Y"),
    ]);
    table.set_header(header);

    for (i, fund) in funds.iter().enumerate() {
        let mut row = Vec::new();
        if numbered {
            row.push(Cell::new(i + 1));
        }
        row.extend([
            Cell::new(ui::fund_title(fund)),
            Cell::new(fund.asset_class),
            Cell::new(&fund.category),
            Cell::new(ui::risk_label(fund.risk_level)),
            Cell::new(&fund.area),
            Cell::new(fund.dividend_frequency),
            ui::return_cell(fund.period_return(Period::OneYear)),
            ui::return_cell(fund.period_return(Period::ThreeYears)),
        ]);
        table.add_row(row);
    }
    table
}

pub fn render(results: &[&FundRecord], max_results: usize) -> String {
    if results.is_empty() {
        return "No funds match the search criteria. Try different filters.".to_string();
    }

    let shown = &results[..results.len().min(max_results)];
    let mut output = format!("Found {} funds", results.len());
    if shown.len() < results.len() {
        output.push_str(&format!(" (showing first {})", shown.len()));
    }
    output.push_str(":\n\n");
    output.push_str(&funds_table(shown, false).to_string());
    output
}

pub fn run(dataset: &Dataset, config: &AppConfig, criteria: &SearchCriteria) -> Result<()> {
    let results = search(dataset, criteria);
    println!("{}", render(&results, config.display.max_results));
    Ok(())
}
