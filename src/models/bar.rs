use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 하루치 OHLCV 봉
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Bar {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// 시가=고가=저가=종가인 봉 (테스트/합성 데이터용)
    pub fn flat(date: NaiveDate, price: f64, volume: f64) -> Self {
        Bar::new(date, price, price, price, price, volume)
    }
}
