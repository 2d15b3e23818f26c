use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AnalysisError;
use crate::models::bar::Bar;
use crate::utils::math::round_price;
use crate::utils::trading_days;
use super::HistoricalDataProvider;

/// 랜덤 워크 일봉을 만들어 내는 모의 데이터 제공자 (데모/테스트용)
///
/// 같은 시드와 기간이면 항상 같은 봉을 돌려준다.
pub struct MockDataProvider {
    seed: u64,
    start_price: f64,
    daily_volatility: f64,
}

impl MockDataProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            start_price: 100.0,
            daily_volatility: 0.02,
        }
    }

    pub fn with_start_price(mut self, price: f64) -> Self {
        self.start_price = price;
        self
    }

    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.daily_volatility = volatility;
        self
    }
}

impl HistoricalDataProvider for MockDataProvider {
    fn available_symbols(&self) -> Vec<String> {
        vec!["MOCK".to_string()]
    }

    fn load_data(
        &self,
        _symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, AnalysisError> {
        if !(self.start_price > 0.0) || !(self.daily_volatility >= 0.0) {
            return Err(AnalysisError::InvalidParameter(format!(
                "mock price {} / volatility {} must be positive",
                self.start_price, self.daily_volatility
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        // 모든 가격은 0.01 단위
        let mut last_close = f64::max(round_price(self.start_price, 0.01), 0.01);
        let mut bars = Vec::new();

        for date in trading_days(start, end) {
            let change = if self.daily_volatility > 0.0 {
                rng.gen_range(-self.daily_volatility..self.daily_volatility)
            } else {
                0.0
            };
            let open = last_close;
            let close = f64::max(round_price(open * (1.0 + change), 0.01), 0.01);
            let spread = open.max(close) * self.daily_volatility * 0.5;
            let high = round_price(open.max(close) + spread, 0.01);
            let low = f64::max(round_price(open.min(close) - spread, 0.01), 0.01);
            let volume = rng.gen_range(500_000.0..5_000_000.0f64).round();

            bars.push(Bar::new(date, open, high, low, close, volume));
            last_close = close;
        }

        log::debug!("모의 데이터 {}개 봉 생성", bars.len());
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        )
    }

    #[test]
    fn test_deterministic_for_seed() {
        let (start, end) = range();
        let a = MockDataProvider::new(42).load_data("MOCK", start, end).unwrap();
        let b = MockDataProvider::new(42).load_data("MOCK", start, end).unwrap();
        let c = MockDataProvider::new(43).load_data("MOCK", start, end).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_bars_are_well_formed() {
        let (start, end) = range();
        let bars = MockDataProvider::new(1).load_data("MOCK", start, end).unwrap();

        assert!(bars.len() > 100);
        for pair in bars.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        for bar in &bars {
            assert!(bar.low <= bar.open.min(bar.close));
            assert!(bar.high >= bar.open.max(bar.close));
            assert!(bar.volume > 0.0);
        }
    }

    #[test]
    fn test_zero_volatility_is_flat() {
        let (start, end) = range();
        let bars = MockDataProvider::new(1)
            .with_start_price(50.0)
            .with_volatility(0.0)
            .load_data("MOCK", start, end)
            .unwrap();

        assert!(bars.iter().all(|b| b.close == 50.0 && b.high == 50.0 && b.low == 50.0));
    }

    #[test]
    fn test_off_tick_start_price() {
        let (start, end) = range();
        let bars = MockDataProvider::new(7)
            .with_start_price(50.123)
            .with_volatility(0.00001)
            .load_data("MOCK", start, end)
            .unwrap();

        assert!((bars[0].open - 50.12).abs() < 1e-9);
        for bar in &bars {
            assert!(bar.high >= bar.open.max(bar.close));
            assert!(bar.low <= bar.open.min(bar.close));
        }
    }

    #[test]
    fn test_invalid_settings() {
        let (start, end) = range();
        let provider = MockDataProvider::new(1).with_start_price(-1.0);
        assert!(provider.load_data("MOCK", start, end).is_err());
    }
}
