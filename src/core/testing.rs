//! Fixture builder for engine unit tests.

use crate::core::fund::{
    AssetClass, DividendFrequency, FundRecord, Holding, Period, PeriodReturns,
};

pub(crate) struct FundBuilder {
    fund: FundRecord,
}

impl FundBuilder {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            fund: FundRecord {
                id: id.to_string(),
                name: format!("Fund {id}"),
                issuer: "Ferris Investments".to_string(),
                asset_class: AssetClass::Equity,
                category: "大型股票".to_string(),
                area: "台灣".to_string(),
                risk_level: 3,
                dividend_frequency: DividendFrequency::NonDistributing,
                cost_performance: None,
                dividend_yield: None,
                dividend_return: None,
                returns: PeriodReturns::default(),
                volatility: None,
                sharpe_ratio: None,
                trading_types: Vec::new(),
                holdings: Vec::new(),
            },
        }
    }

    pub(crate) fn name(mut self, name: &str) -> Self {
        self.fund.name = name.to_string();
        self
    }

    pub(crate) fn issuer(mut self, issuer: &str) -> Self {
        self.fund.issuer = issuer.to_string();
        self
    }

    pub(crate) fn asset_class(mut self, asset_class: AssetClass) -> Self {
        self.fund.asset_class = asset_class;
        self
    }

    pub(crate) fn category(mut self, category: &str) -> Self {
        self.fund.category = category.to_string();
        self
    }

    pub(crate) fn area(mut self, area: &str) -> Self {
        self.fund.area = area.to_string();
        self
    }

    pub(crate) fn risk(mut self, level: u8) -> Self {
        self.fund.risk_level = level;
        self
    }

    pub(crate) fn dividend(mut self, frequency: DividendFrequency) -> Self {
        self.fund.dividend_frequency = frequency;
        self
    }

    pub(crate) fn ret(mut self, period: Period, value: f64) -> Self {
        let slot = match period {
            Period::ThreeMonths => &mut self.fund.returns.three_months,
            Period::SixMonths => &mut self.fund.returns.six_months,
            Period::OneYear => &mut self.fund.returns.one_year,
            Period::TwoYears => &mut self.fund.returns.two_years,
            Period::ThreeYears => &mut self.fund.returns.three_years,
            Period::FiveYears => &mut self.fund.returns.five_years,
        };
        *slot = Some(value);
        self
    }

    pub(crate) fn volatility(mut self, value: f64) -> Self {
        self.fund.volatility = Some(value);
        self
    }

    pub(crate) fn sharpe(mut self, value: f64) -> Self {
        self.fund.sharpe_ratio = Some(value);
        self
    }

    pub(crate) fn dividend_yield(mut self, value: f64) -> Self {
        self.fund.dividend_yield = Some(value);
        self
    }

    pub(crate) fn trading_type(mut self, tag: &str) -> Self {
        self.fund.trading_types.push(tag.to_string());
        self
    }

    pub(crate) fn holding(mut self, stock_name: &str, weight: f64) -> Self {
        self.fund.holdings.push(Holding {
            stock_name: stock_name.to_string(),
            weight,
        });
        self
    }

    pub(crate) fn build(self) -> FundRecord {
        self.fund
    }
}
