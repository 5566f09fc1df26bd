//! Fund record model shared by every engine.
//!
//! Field names on the wire follow the catalog's JSON export (`mfxId`,
//! `fundShortName`, ...). Classification labels are the catalog's own
//! (Traditional Chinese) strings; the enums below accept English aliases as
//! well so the command line can use either.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Lowest rating on the risk scale.
pub const RISK_MIN: u8 = 1;
/// Highest rating on the risk scale.
pub const RISK_MAX: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    #[serde(rename = "股票型", alias = "equity")]
    Equity,
    #[serde(rename = "債券型", alias = "bond")]
    Bond,
    #[serde(rename = "平衡型", alias = "balanced")]
    Balanced,
    #[serde(rename = "貨幣型", alias = "money-market")]
    MoneyMarket,
    #[serde(other)]
    Other,
}

impl Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AssetClass::Equity => "Equity",
                AssetClass::Bond => "Bond",
                AssetClass::Balanced => "Balanced",
                AssetClass::MoneyMarket => "Money market",
                AssetClass::Other => "Other",
            }
        )
    }
}

impl FromStr for AssetClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "股票型" | "equity" | "stock" => Ok(AssetClass::Equity),
            "債券型" | "bond" | "debt" => Ok(AssetClass::Bond),
            "平衡型" | "balanced" | "hybrid" => Ok(AssetClass::Balanced),
            "貨幣型" | "money-market" | "money" => Ok(AssetClass::MoneyMarket),
            _ => Err(anyhow!("Invalid asset class: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DividendFrequency {
    #[serde(rename = "不配息", alias = "none")]
    NonDistributing,
    #[serde(rename = "月配息", alias = "monthly")]
    Monthly,
    #[serde(rename = "季配息", alias = "quarterly")]
    Quarterly,
    #[serde(rename = "半年配息", alias = "semi-annual")]
    SemiAnnual,
    #[serde(rename = "年配息", alias = "annual")]
    Annual,
    #[serde(rename = "未固定配息", alias = "irregular")]
    Irregular,
    #[serde(other)]
    Other,
}

impl Display for DividendFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DividendFrequency::NonDistributing => "Non-distributing",
                DividendFrequency::Monthly => "Monthly",
                DividendFrequency::Quarterly => "Quarterly",
                DividendFrequency::SemiAnnual => "Semi-annual",
                DividendFrequency::Annual => "Annual",
                DividendFrequency::Irregular => "Irregular",
                DividendFrequency::Other => "Other",
            }
        )
    }
}

impl FromStr for DividendFrequency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "不配息" | "none" | "non-distributing" => Ok(DividendFrequency::NonDistributing),
            "月配息" | "monthly" => Ok(DividendFrequency::Monthly),
            "季配息" | "quarterly" => Ok(DividendFrequency::Quarterly),
            "半年配息" | "semi-annual" => Ok(DividendFrequency::SemiAnnual),
            "年配息" | "annual" => Ok(DividendFrequency::Annual),
            "未固定配息" | "irregular" => Ok(DividendFrequency::Irregular),
            _ => Err(anyhow!("Invalid dividend frequency: {}", s)),
        }
    }
}

/// Return periods reported for every fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Period {
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    ThreeYears,
    FiveYears,
}

impl Period {
    pub const ALL: [Period; 6] = [
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::TwoYears,
        Period::ThreeYears,
        Period::FiveYears,
    ];

    /// Short code used on the command line and in ranking keys.
    pub fn code(&self) -> &'static str {
        match self {
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::ThreeYears => "3y",
            Period::FiveYears => "5y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::ThreeMonths => "3 months",
            Period::SixMonths => "6 months",
            Period::OneYear => "1 year",
            Period::TwoYears => "2 years",
            Period::ThreeYears => "3 years",
            Period::FiveYears => "5 years",
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "3m" => Ok(Period::ThreeMonths),
            "6m" => Ok(Period::SixMonths),
            "1y" => Ok(Period::OneYear),
            "2y" => Ok(Period::TwoYears),
            "3y" => Ok(Period::ThreeYears),
            "5y" => Ok(Period::FiveYears),
            _ => Err(anyhow!("Invalid return period: {}", s)),
        }
    }
}

/// Period returns in percent. A missing figure stays `None`; it is never
/// treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodReturns {
    #[serde(rename = "rateOfReturn3Months", default)]
    pub three_months: Option<f64>,
    #[serde(rename = "rateOfReturn6Months", default)]
    pub six_months: Option<f64>,
    #[serde(rename = "rateOfReturn1Year", default)]
    pub one_year: Option<f64>,
    #[serde(rename = "rateOfReturn2Year", default)]
    pub two_years: Option<f64>,
    #[serde(rename = "rateOfReturn3Years", default)]
    pub three_years: Option<f64>,
    #[serde(rename = "rateOfReturn5Years", default)]
    pub five_years: Option<f64>,
}

impl PeriodReturns {
    pub fn get(&self, period: Period) -> Option<f64> {
        match period {
            Period::ThreeMonths => self.three_months,
            Period::SixMonths => self.six_months,
            Period::OneYear => self.one_year,
            Period::TwoYears => self.two_years,
            Period::ThreeYears => self.three_years,
            Period::FiveYears => self.five_years,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub stock_name: String,
    /// Fraction of fund assets, 0.05 = 5%.
    #[serde(rename = "holding_ratio")]
    pub weight: f64,
}

/// One distributable share class of a fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRecord {
    #[serde(rename = "mfxId")]
    pub id: String,
    #[serde(rename = "fundShortName")]
    pub name: String,
    #[serde(rename = "generalIssuer")]
    pub issuer: String,
    #[serde(rename = "investmentTarget")]
    pub asset_class: AssetClass,
    #[serde(rename = "fundNameCategory")]
    pub category: String,
    #[serde(rename = "investmentArea")]
    pub area: String,
    pub risk_level: u8,
    pub dividend_frequency: DividendFrequency,
    #[serde(rename = "costPerformanceValue", default)]
    pub cost_performance: Option<f64>,
    #[serde(rename = "dividendAnnualizedYield", default)]
    pub dividend_yield: Option<f64>,
    #[serde(rename = "dividendAnnualRateOfReturn", default)]
    pub dividend_return: Option<f64>,
    #[serde(flatten)]
    pub returns: PeriodReturns,
    #[serde(rename = "annualizedStandardDeviation", default)]
    pub volatility: Option<f64>,
    #[serde(default)]
    pub sharpe_ratio: Option<f64>,
    #[serde(rename = "tradingType", default)]
    pub trading_types: Vec<String>,
    #[serde(rename = "stockTop", default)]
    pub holdings: Vec<Holding>,
}

impl FundRecord {
    pub fn period_return(&self, period: Period) -> Option<f64> {
        self.returns.get(period)
    }
}
