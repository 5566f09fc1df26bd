use super::ui;
use crate::core::compare::{Comparison, compare};
use crate::core::config::AppConfig;
use crate::core::{Dataset, FundRecord, Period};
use anyhow::{Result, anyhow};
use comfy_table::{Cell, Table};

fn add_row(
    table: &mut Table,
    label: &str,
    funds: &[&FundRecord],
    cell: impl Fn(&FundRecord) -> Cell,
) {
    let mut cells = vec![Cell::new(label)];
    cells.extend(funds.iter().map(|f| cell(f)));
    table.add_row(cells);
}

pub fn render(comparison: &Comparison<'_>, config: &AppConfig) -> String {
    let funds = comparison.funds.as_slice();
    let mut table = ui::new_styled_table();
    let mut header = vec![ui::header_cell("Item")];
    header.extend(funds.iter().map(|f| ui::header_cell(&f.name)));
    table.set_header(header);

    add_row(&mut table, "Fund ID", funds, |f| Cell::new(&f.id));
    add_row(&mut table, "Type", funds, |f| Cell::new(f.asset_class));
    add_row(&mut table, "Category", funds, |f| Cell::new(&f.category));
    add_row(&mut table, "Risk level", funds, |f| {
        Cell::new(ui::risk_label(f.risk_level))
    });
    add_row(&mut table, "Issuer", funds, |f| Cell::new(&f.issuer));
    add_row(&mut table, "Area", funds, |f| Cell::new(&f.area));
    add_row(&mut table, "Dividend", funds, |f| Cell::new(f.dividend_frequency));
    add_row(&mut table, "Cost/value score", funds, |f| {
        ui::format_optional_cell(f.cost_performance, |v| format!("{v:.2}"))
    });
    for period in Period::ALL {
        add_row(
            &mut table,
            &format!("{} return", period.label()),
            funds,
            |f| ui::return_cell(f.period_return(period)),
        );
    }
    add_row(&mut table, "Annualized std dev", funds, |f| {
        ui::format_optional_cell(f.volatility, |v| format!("{v:.2}%"))
    });

    let mut output = format!(
        "{}\n\n{}",
        ui::style_text(
            &format!("Fund comparison ({} funds)", comparison.funds.len()),
            ui::StyleType::Title
        ),
        table
    );
    if !comparison.not_found.is_empty() {
        output.push_str(&format!(
            "\n\n{}",
            ui::style_text(
                &format!("Not found: {}", comparison.not_found.join(", ")),
                ui::StyleType::Error
            )
        ));
    }
    for fund in &comparison.funds {
        output.push_str(&format!("\n- {}: {}", fund.name, config.fund_url(&fund.id)));
    }
    output
}

pub fn run(dataset: &Dataset, config: &AppConfig, ids: &[String]) -> Result<()> {
    let comparison = compare(dataset, ids).map_err(|e| {
        anyhow!(
            "{e}. Unknown fund ids: {}",
            if e.not_found.is_empty() {
                "none".to_string()
            } else {
                e.not_found.join(", ")
            }
        )
    })?;
    println!("{}", render(&comparison, config));
    Ok(())
}
