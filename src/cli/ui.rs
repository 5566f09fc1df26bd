use crate::core::FundRecord;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Warning,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Warning => style(text).yellow().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats an `Option<T>` into a `Cell`. `None` is displayed as "N/A".
pub fn format_optional_cell<T>(value: Option<T>, format_fn: impl Fn(T) -> String) -> Cell {
    value.map_or(
        Cell::new("N/A")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right),
        |v| Cell::new(format_fn(v)).set_alignment(CellAlignment::Right),
    )
}

/// Creates a cell for a percentage return with color coding.
pub fn return_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) if v >= 0.0 => Cell::new(format!("{v:.2}%"))
            .fg(Color::Green)
            .set_alignment(CellAlignment::Right),
        Some(v) => Cell::new(format!("{v:.2}%"))
            .fg(Color::Red)
            .set_alignment(CellAlignment::Right),
        None => format_optional_cell(None::<f64>, |v| format!("{v:.2}%")),
    }
}

/// Risk level as shown by the catalog, e.g. `RR4`.
pub fn risk_label(level: u8) -> String {
    format!("RR{level}")
}

/// Holding weight stored as a fraction, shown as a percentage.
pub fn weight_text(weight: f64) -> String {
    format!("{:.2}%", weight * 100.0)
}

/// One-line identity of a fund: `Name (ID)`.
pub fn fund_title(fund: &FundRecord) -> String {
    format!("{} ({})", fund.name, fund.id)
}

/// Creates a spinner for work of unknown length.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
