//! Peer-group statistics for a single fund.
//!
//! The peer group is every record sharing the fund's name-category, share
//! classes included. Values are left unrounded; the presentation layer
//! formats them.

use crate::core::dataset::Dataset;
use crate::core::fund::{FundRecord, Period};
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

/// Volatility gap, in percentage points, still considered "near" the peers.
const NEAR_AVERAGE_BAND: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRanking {
    pub period: Period,
    /// 1-based position among peers with a figure, best first.
    /// `None` when the fund has no figure for the period.
    pub rank: Option<usize>,
    /// `round(rank / peers_with_value * 100)`; `None` when unranked.
    pub percentile: Option<u32>,
    pub peers_with_value: usize,
    pub peer_average: Option<f64>,
    pub fund_return: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VolatilityBand {
    NearPeerAverage,
    BelowPeerAverage,
    AbovePeerAverage,
}

impl VolatilityBand {
    fn classify(diff: f64) -> Self {
        if diff.abs() < NEAR_AVERAGE_BAND {
            VolatilityBand::NearPeerAverage
        } else if diff < 0.0 {
            VolatilityBand::BelowPeerAverage
        } else {
            VolatilityBand::AbovePeerAverage
        }
    }
}

impl Display for VolatilityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VolatilityBand::NearPeerAverage => "near peer average",
                VolatilityBand::BelowPeerAverage => "below peer average",
                VolatilityBand::AbovePeerAverage => "above peer average",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskComparison {
    pub peer_average_volatility: f64,
    pub fund_volatility: f64,
    pub band: VolatilityBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub total_in_category: usize,
    pub rankings: Vec<PeriodRanking>,
    /// `None` when the fund or all of its peers lack a volatility figure.
    pub risk: Option<RiskComparison>,
}

impl CategoryStats {
    pub fn ranking(&self, period: Period) -> Option<&PeriodRanking> {
        self.rankings.iter().find(|r| r.period == period)
    }
}

pub fn category_stats(dataset: &Dataset, fund: &FundRecord) -> CategoryStats {
    let peers: Vec<&FundRecord> = dataset
        .iter()
        .filter(|f| f.category == fund.category)
        .collect();
    debug!(
        "Computing category stats for {} against {} peers in '{}'",
        fund.id,
        peers.len(),
        fund.category
    );

    let rankings = Period::ALL
        .iter()
        .map(|&period| rank_in_period(&peers, fund, period))
        .collect();

    CategoryStats {
        category: fund.category.clone(),
        total_in_category: peers.len(),
        rankings,
        risk: compare_volatility(&peers, fund),
    }
}

fn rank_in_period(peers: &[&FundRecord], fund: &FundRecord, period: Period) -> PeriodRanking {
    let mut with_value: Vec<(f64, &str)> = peers
        .iter()
        .filter_map(|f| f.period_return(period).map(|v| (v, f.id.as_str())))
        .collect();
    with_value.sort_by(|(a, _), (b, _)| b.total_cmp(a));

    let fund_return = fund.period_return(period);
    let rank = fund_return.and_then(|_| {
        with_value
            .iter()
            .position(|(_, id)| *id == fund.id)
            .map(|i| i + 1)
    });
    let peers_with_value = with_value.len();
    let percentile =
        rank.map(|r| ((r as f64 / peers_with_value as f64) * 100.0).round() as u32);

    PeriodRanking {
        period,
        rank,
        percentile,
        peers_with_value,
        peer_average: mean(with_value.iter().map(|(v, _)| *v)),
        fund_return,
    }
}

fn compare_volatility(peers: &[&FundRecord], fund: &FundRecord) -> Option<RiskComparison> {
    let fund_volatility = fund.volatility?;
    let peer_average_volatility = mean(peers.iter().filter_map(|f| f.volatility))?;
    Some(RiskComparison {
        peer_average_volatility,
        fund_volatility,
        band: VolatilityBand::classify(fund_volatility - peer_average_volatility),
    })
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FundBuilder;

    fn tech_dataset() -> Dataset {
        Dataset::new(vec![
            FundBuilder::new("T1")
                .category("科技")
                .ret(Period::OneYear, 30.0)
                .ret(Period::ThreeMonths, 4.0)
                .volatility(20.0)
                .build(),
            FundBuilder::new("T2")
                .category("科技")
                .ret(Period::OneYear, 20.0)
                .ret(Period::ThreeMonths, 6.0)
                .volatility(22.0)
                .build(),
            FundBuilder::new("T3")
                .category("科技")
                .ret(Period::OneYear, 10.0)
                .volatility(15.0)
                .build(),
            FundBuilder::new("T4").category("科技").volatility(23.0).build(),
            FundBuilder::new("G1")
                .category("貴金屬")
                .ret(Period::OneYear, 99.0)
                .volatility(30.0)
                .build(),
        ])
        .unwrap()
    }

    #[test]
    fn test_best_performer_ranks_first() {
        let dataset = tech_dataset();
        let fund = dataset.get("T1").unwrap();
        let stats = category_stats(&dataset, fund);

        assert_eq!(stats.category, "科技");
        assert_eq!(stats.total_in_category, 4);
        assert_eq!(stats.rankings.len(), 6);

        let one_year = stats.ranking(Period::OneYear).unwrap();
        assert_eq!(one_year.rank, Some(1));
        assert_eq!(one_year.peers_with_value, 3);
        assert_eq!(one_year.percentile, Some(33));
        assert_eq!(one_year.peer_average, Some(20.0));
        assert_eq!(one_year.fund_return, Some(30.0));
    }

    #[test]
    fn test_last_place_is_hundredth_percentile() {
        let dataset = tech_dataset();
        let stats = category_stats(&dataset, dataset.get("T3").unwrap());
        let one_year = stats.ranking(Period::OneYear).unwrap();
        assert_eq!(one_year.rank, Some(3));
        assert_eq!(one_year.percentile, Some(100));
    }

    #[test]
    fn test_single_peer_with_value() {
        let dataset = tech_dataset();
        let stats = category_stats(&dataset, dataset.get("G1").unwrap());
        let one_year = stats.ranking(Period::OneYear).unwrap();
        assert_eq!(one_year.rank, Some(1));
        assert_eq!(one_year.percentile, Some(100));
        assert_eq!(stats.total_in_category, 1);
    }

    #[test]
    fn test_missing_period_is_unranked() {
        let dataset = tech_dataset();
        let stats = category_stats(&dataset, dataset.get("T3").unwrap());

        let three_months = stats.ranking(Period::ThreeMonths).unwrap();
        assert_eq!(three_months.rank, None);
        assert_eq!(three_months.percentile, None);
        assert_eq!(three_months.fund_return, None);
        assert_eq!(three_months.peer_average, Some(5.0));

        let five_years = stats.ranking(Period::FiveYears).unwrap();
        assert_eq!(five_years.peers_with_value, 0);
        assert_eq!(five_years.peer_average, None);
    }

    #[test]
    fn test_volatility_bands() {
        // Peer average volatility in 科技 is (20 + 22 + 15 + 23) / 4 = 20
        let dataset = tech_dataset();

        let near = category_stats(&dataset, dataset.get("T1").unwrap());
        assert_eq!(near.risk.as_ref().unwrap().band, VolatilityBand::NearPeerAverage);
        assert_eq!(near.risk.as_ref().unwrap().peer_average_volatility, 20.0);

        let below = category_stats(&dataset, dataset.get("T3").unwrap());
        assert_eq!(below.risk.unwrap().band, VolatilityBand::BelowPeerAverage);

        let above = category_stats(&dataset, dataset.get("T2").unwrap());
        assert_eq!(above.risk.unwrap().band, VolatilityBand::AbovePeerAverage);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(VolatilityBand::classify(0.99), VolatilityBand::NearPeerAverage);
        assert_eq!(VolatilityBand::classify(-0.99), VolatilityBand::NearPeerAverage);
        assert_eq!(VolatilityBand::classify(1.0), VolatilityBand::AbovePeerAverage);
        assert_eq!(VolatilityBand::classify(-1.0), VolatilityBand::BelowPeerAverage);
        assert_eq!(
            VolatilityBand::BelowPeerAverage.to_string(),
            "below peer average"
        );
    }

    #[test]
    fn test_no_volatility_means_no_risk_comparison() {
        let dataset = Dataset::new(vec![FundBuilder::new("A").build()]).unwrap();
        let stats = category_stats(&dataset, dataset.get("A").unwrap());
        assert!(stats.risk.is_none());
    }
}
