use fundlens::core::advisor::{SuggestionKind, complement_suggestions};
use fundlens::core::fund::PeriodReturns;
use fundlens::core::overlap::overlap;
use fundlens::core::stats::category_stats;
use fundlens::core::{
    AssetClass, Dataset, DividendFrequency, FundRecord, Holding, Metric, Period, SearchCriteria,
    search, top_performers,
};

fn fund(id: &str, risk_level: u8, holdings: &[(&str, f64)]) -> FundRecord {
    FundRecord {
        id: id.to_string(),
        name: format!("Fund {id}"),
        issuer: "Ferris Investments".to_string(),
        asset_class: AssetClass::Equity,
        category: "科技".to_string(),
        area: "台灣".to_string(),
        risk_level,
        dividend_frequency: DividendFrequency::NonDistributing,
        cost_performance: None,
        dividend_yield: None,
        dividend_return: None,
        returns: PeriodReturns::default(),
        volatility: None,
        sharpe_ratio: None,
        trading_types: Vec::new(),
        holdings: holdings
            .iter()
            .map(|(name, weight)| Holding {
                stock_name: name.to_string(),
                weight: *weight,
            })
            .collect(),
    }
}

fn with_one_year(mut record: FundRecord, value: Option<f64>) -> FundRecord {
    record.returns.one_year = value;
    record
}

fn share_class_dataset() -> Dataset {
    Dataset::new(vec![
        fund("A", 3, &[("X", 0.1), ("Y", 0.05)]),
        fund("B", 3, &[("X", 0.1), ("Y", 0.05)]),
        fund("C", 5, &[("Z", 0.2)]),
    ])
    .unwrap()
}

fn ids(funds: &[&FundRecord]) -> Vec<String> {
    funds.iter().map(|f| f.id.clone()).collect()
}

#[test_log::test]
fn test_share_class_scenario() {
    let dataset = share_class_dataset();

    assert_eq!(ids(&search(&dataset, &SearchCriteria::default())), vec!["A", "C"]);

    let result = overlap(&dataset, &["A", "C"]).unwrap();
    assert_eq!(result.overlap_ratio, 0.0);
    assert!(result.concentration_warning.is_none());

    let err = overlap(&dataset, &["A", "B"]).unwrap_err();
    assert_eq!(err.resolved, 1);
    assert_eq!(err.collapsed, vec!["B"]);
}

#[test_log::test]
fn test_search_is_idempotent() {
    let dataset = share_class_dataset();
    let criteria = SearchCriteria {
        max_risk_level: Some(4),
        ..Default::default()
    };

    let first = search(&dataset, &criteria);
    let again = Dataset::new(first.iter().map(|f| (*f).clone()).collect()).unwrap();
    assert_eq!(ids(&search(&again, &criteria)), ids(&first));
}

#[test_log::test]
fn test_ranking_is_monotonic_and_skips_missing() {
    let dataset = Dataset::new(vec![
        with_one_year(fund("R1", 3, &[("A", 0.1)]), Some(4.0)),
        with_one_year(fund("R2", 3, &[("B", 0.1)]), None),
        with_one_year(fund("R3", 3, &[("C", 0.1)]), Some(12.5)),
        with_one_year(fund("R4", 3, &[("D", 0.1)]), Some(-3.0)),
        with_one_year(fund("R5", 3, &[("E", 0.1)]), Some(12.5)),
    ])
    .unwrap();

    let ranked = top_performers(
        &dataset,
        &SearchCriteria::default(),
        Metric::Return(Period::OneYear),
        None,
        10,
    );
    assert_eq!(ids(&ranked), vec!["R3", "R5", "R1", "R4"]);
    let values: Vec<f64> = ranked
        .iter()
        .filter_map(|f| f.period_return(Period::OneYear))
        .collect();
    assert_eq!(values.len(), ranked.len());
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
}

#[test_log::test]
fn test_sole_performer_ranks_first() {
    let dataset = Dataset::new(vec![
        with_one_year(fund("S1", 3, &[]), Some(8.0)),
        with_one_year(fund("S2", 3, &[]), None),
    ])
    .unwrap();

    let stats = category_stats(&dataset, dataset.get("S1").unwrap());
    let ranking = stats.ranking(Period::OneYear).unwrap();
    assert_eq!(ranking.rank, Some(1));
    assert_eq!(ranking.percentile, Some(100));
}

#[test_log::test]
fn test_complement_rule_order() {
    let dataset = Dataset::new(vec![fund("T", 5, &[])]).unwrap();

    let profile = complement_suggestions(&dataset, "T").unwrap();
    let kinds: Vec<SuggestionKind> = profile.suggestions.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SuggestionKind::AssetBalance,
            SuggestionKind::RegionalDiversification,
            SuggestionKind::RiskReduction,
            SuggestionKind::IncomeGeneration,
            SuggestionKind::SectorDiversification,
        ]
    );
}

#[test_log::test]
fn test_queries_run_in_parallel_over_one_dataset() {
    let dataset = share_class_dataset();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let found = ids(&search(&dataset, &SearchCriteria::default()));
                    let shared = overlap(&dataset, &["A", "C"]).map(|r| r.shared_total);
                    (found, shared)
                })
            })
            .collect();
        for handle in handles {
            let (found, shared) = handle.join().unwrap();
            assert_eq!(found, vec!["A", "C"]);
            assert_eq!(shared, Ok(0));
        }
    });
}
