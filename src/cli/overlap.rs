use super::ui;
use crate::core::config::AppConfig;
use crate::core::overlap::{OverlapResult, overlap};
use crate::core::Dataset;
use anyhow::{Result, anyhow};
use comfy_table::Cell;

pub fn render(result: &OverlapResult, config: &AppConfig) -> String {
    let mut lines = vec![
        ui::style_text(
            &format!("Holdings overlap ({} funds)", result.funds.len()),
            ui::StyleType::Title,
        ),
        String::new(),
    ];
    for fund in &result.funds {
        lines.push(format!(
            "- {} ({}): {} holdings",
            fund.name, fund.id, fund.holding_count
        ));
    }
    if !result.collapsed.is_empty() {
        lines.push(ui::style_text(
            &format!(
                "Skipped as share classes of a fund above: {}",
                result.collapsed.join(", ")
            ),
            ui::StyleType::Subtle,
        ));
    }
    if !result.not_found.is_empty() {
        lines.push(ui::style_text(
            &format!("Not found: {}", result.not_found.join(", ")),
            ui::StyleType::Error,
        ));
    }
    lines.push(String::new());
    lines.push(ui::style_text(
        &format!(
            "Overlap ratio: {:.1}% ({} of {} distinct stocks)",
            result.overlap_ratio, result.shared_total, result.distinct_stocks
        ),
        ui::StyleType::Label,
    ));
    if let Some(warning) = &result.concentration_warning {
        lines.push(ui::style_text(&warning.to_string(), ui::StyleType::Warning));
    }

    if result.shared_holdings.is_empty() {
        lines.push(String::new());
        lines.push("These funds share none of their top holdings.".to_string());
    } else {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Stock"),
            ui::header_cell("Held by"),
            ui::header_cell("Avg weight"),
            ui::header_cell("Weight per fund"),
        ]);
        for shared in &result.shared_holdings {
            let details = shared
                .contributions
                .iter()
                .map(|c| format!("{}: {}", c.fund_id, ui::weight_text(c.weight)))
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(vec![
                Cell::new(&shared.stock_name),
                Cell::new(format!("{} funds", shared.fund_count)),
                Cell::new(ui::weight_text(shared.average_weight)),
                Cell::new(details),
            ]);
        }
        lines.push(String::new());
        lines.push(table.to_string());
        if result.shared_total > result.shared_holdings.len() {
            lines.push(format!(
                "Showing {} of {} shared holdings.",
                result.shared_holdings.len(),
                result.shared_total
            ));
        }
    }

    lines.push(String::new());
    for fund in &result.funds {
        lines.push(format!("- {}: {}", fund.name, config.fund_url(&fund.id)));
    }
    lines.join("\n")
}

pub fn run(dataset: &Dataset, config: &AppConfig, ids: &[String]) -> Result<()> {
    let result = overlap(dataset, ids).map_err(|e| {
        let mut message = e.to_string();
        if !e.not_found.is_empty() {
            message.push_str(&format!(". Unknown fund ids: {}", e.not_found.join(", ")));
        }
        if !e.collapsed.is_empty() {
            message.push_str(&format!(
                ". Share classes of the same fund: {}",
                e.collapsed.join(", ")
            ));
        }
        anyhow!(message)
    })?;
    println!("{}", render(&result, config));
    Ok(())
}
