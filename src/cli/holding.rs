use super::ui;
use crate::core::holding::{HoldingMatch, search_by_holding};
use crate::core::{AssetClass, Dataset};
use anyhow::Result;
use comfy_table::Cell;

pub fn render(matches: &[HoldingMatch<'_>], stock_query: &str) -> String {
    if matches.is_empty() {
        return format!("No funds hold a stock matching \"{stock_query}\".");
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Fund"),
        ui::header_cell("Type"),
        ui::header_cell("Risk"),
        ui::header_cell("Matched holdings"),
        ui::header_cell("Total weight"),
    ]);
    for (i, m) in matches.iter().enumerate() {
        let holdings = m
            .matched
            .iter()
            .map(|h| format!("{} {}", h.stock_name, ui::weight_text(h.weight)))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(ui::fund_title(m.fund)),
            Cell::new(m.fund.asset_class),
            Cell::new(ui::risk_label(m.fund.risk_level)),
            Cell::new(holdings),
            Cell::new(ui::weight_text(m.matched_weight)),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text(
            &format!("Funds holding \"{stock_query}\" ({} shown)", matches.len()),
            ui::StyleType::Title
        ),
        table
    )
}

pub fn run(
    dataset: &Dataset,
    stock_query: &str,
    asset_class: Option<AssetClass>,
    limit: usize,
) -> Result<()> {
    let matches = search_by_holding(dataset, stock_query, asset_class, limit);
    println!("{}", render(&matches, stock_query));
    Ok(())
}
