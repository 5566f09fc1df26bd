use super::{search::funds_table, ui};
use crate::core::advisor::{ComplementProfile, complement_suggestions};
use crate::core::config::AppConfig;
use crate::core::ranking::rank_records;
use crate::core::{Dataset, Metric, Period, search};
use anyhow::{Result, anyhow};

/// Renders each suggestion followed by its best candidates by 1-year return.
pub fn render(dataset: &Dataset, config: &AppConfig, profile: &ComplementProfile<'_>) -> String {
    let fund = profile.fund;
    let mut sections = vec![format!(
        "{}\n{}",
        ui::style_text(
            &format!("Complements for {}", ui::fund_title(fund)),
            ui::StyleType::Title
        ),
        ui::style_text(
            &format!(
                "{} | {} | {} | {}",
                fund.asset_class,
                fund.area,
                ui::risk_label(fund.risk_level),
                fund.dividend_frequency
            ),
            ui::StyleType::Subtle
        )
    )];

    if profile.suggestions.is_empty() {
        sections.push("No complementary fund types to suggest for this fund.".to_string());
        return sections.join("\n\n");
    }

    for (i, suggestion) in profile.suggestions.iter().enumerate() {
        let picks = rank_records(
            search(dataset, &suggestion.criteria),
            Metric::Return(Period::OneYear),
            config.complement.picks_per_suggestion,
        );
        let body = if picks.is_empty() {
            ui::style_text("(no matches for this suggestion)", ui::StyleType::Subtle)
        } else {
            funds_table(&picks, true).to_string()
        };
        sections.push(format!(
            "{}\n{}",
            ui::style_text(
                &format!("{}. {}", i + 1, suggestion.reason),
                ui::StyleType::Label
            ),
            body
        ));
    }
    sections.join("\n\n")
}

pub fn run(dataset: &Dataset, config: &AppConfig, id: &str) -> Result<()> {
    let profile = complement_suggestions(dataset, id)
        .ok_or_else(|| anyhow!("Fund {id} not found, check the identifier"))?;
    println!("{}", render(dataset, config, &profile));
    Ok(())
}
