//! Diversification suggestions for a fund already held.
//!
//! The advisor only proposes [`SearchCriteria`]; running them is up to the
//! caller.

use crate::core::dataset::Dataset;
use crate::core::fund::{AssetClass, DividendFrequency, FundRecord, RISK_MAX, RISK_MIN};
use crate::core::query::SearchCriteria;
use serde::Serialize;
use tracing::debug;

/// Area label of global funds in the catalog.
pub const GLOBAL_AREA: &str = "全球";
/// Region suggested to holders of a global fund (United States).
pub const FOCUS_AREA: &str = "美國";
/// Name-category of technology sector funds.
pub const TECH_CATEGORY: &str = "科技";
/// Name-category of broad market, non-sector equity funds.
pub const BROAD_MARKET_CATEGORY: &str = "不分產業(股)";
/// Risk level from which a lower-risk companion is suggested.
pub const HIGH_RISK_THRESHOLD: u8 = 4;
/// Risk ceiling of the lower-risk companion.
pub const LOW_RISK_CEILING: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuggestionKind {
    AssetBalance,
    RegionalDiversification,
    RiskReduction,
    IncomeGeneration,
    SectorDiversification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub reason: String,
    pub criteria: SearchCriteria,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplementProfile<'a> {
    pub fund: &'a FundRecord,
    pub suggestions: Vec<Suggestion>,
}

/// Applies the suggestion rules to `fund`, in a fixed order.
pub fn suggest(fund: &FundRecord) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    match fund.asset_class {
        AssetClass::Equity => suggestions.push(Suggestion {
            kind: SuggestionKind::AssetBalance,
            reason: "Stock/bond balance: this is an equity fund, pairing it with a bond fund dampens volatility".to_string(),
            criteria: SearchCriteria {
                asset_class: Some(AssetClass::Bond),
                max_risk_level: Some(fund.risk_level.saturating_sub(1).max(RISK_MIN)),
                ..Default::default()
            },
        }),
        AssetClass::Bond => suggestions.push(Suggestion {
            kind: SuggestionKind::AssetBalance,
            reason: "Add growth: this is a bond fund, pairing it with an equity fund lifts expected return".to_string(),
            criteria: SearchCriteria {
                asset_class: Some(AssetClass::Equity),
                max_risk_level: Some((fund.risk_level + 1).min(RISK_MAX)),
                ..Default::default()
            },
        }),
        _ => {}
    }

    if fund.area != GLOBAL_AREA {
        suggestions.push(Suggestion {
            kind: SuggestionKind::RegionalDiversification,
            reason: format!(
                "Regional diversification: this fund invests in {}, consider a global fund",
                fund.area
            ),
            criteria: SearchCriteria {
                area: Some(GLOBAL_AREA.to_string()),
                ..Default::default()
            },
        });
    } else {
        suggestions.push(Suggestion {
            kind: SuggestionKind::RegionalDiversification,
            reason: "Regional focus: this is a global fund, a single-region fund can sharpen the allocation".to_string(),
            criteria: SearchCriteria {
                area: Some(FOCUS_AREA.to_string()),
                ..Default::default()
            },
        });
    }

    if fund.risk_level >= HIGH_RISK_THRESHOLD {
        suggestions.push(Suggestion {
            kind: SuggestionKind::RiskReduction,
            reason: format!(
                "Lower risk: this fund is rated RR{}, a low-risk fund steadies the portfolio",
                fund.risk_level
            ),
            criteria: SearchCriteria {
                max_risk_level: Some(LOW_RISK_CEILING),
                ..Default::default()
            },
        });
    }

    if fund.dividend_frequency == DividendFrequency::NonDistributing {
        suggestions.push(Suggestion {
            kind: SuggestionKind::IncomeGeneration,
            reason: "Cash flow: this fund does not distribute, consider a monthly distributing fund".to_string(),
            criteria: SearchCriteria {
                dividend_frequency: Some(DividendFrequency::Monthly),
                ..Default::default()
            },
        });
    }

    if fund.category == TECH_CATEGORY {
        suggestions.push(Suggestion {
            kind: SuggestionKind::SectorDiversification,
            reason: "Sector diversification: this is a technology fund, a broad market fund spreads sector risk".to_string(),
            criteria: SearchCriteria {
                category: Some(BROAD_MARKET_CATEGORY.to_string()),
                ..Default::default()
            },
        });
    }

    debug!("{} suggestions for {}", suggestions.len(), fund.id);
    suggestions
}

/// Looks up `id` and suggests complements for it. `None` if unknown.
pub fn complement_suggestions<'a>(dataset: &'a Dataset, id: &str) -> Option<ComplementProfile<'a>> {
    let fund = dataset.get(id)?;
    Some(ComplementProfile {
        fund,
        suggestions: suggest(fund),
    })
}
