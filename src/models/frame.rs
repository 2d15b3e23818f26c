use crate::indicators::{MomentumColumns, SignalColumns, TrendColumns, VolatilityColumns, VolumeColumns};
use super::series::Series;

/// 입력 시계열과 같은 길이로 정렬된 지표 열 묶음
///
/// `compute_indicators`가 한 번에 만들고, 이후에는 읽기만 한다.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub series: Series,
    pub trend: TrendColumns,
    pub momentum: MomentumColumns,
    pub volatility: VolatilityColumns,
    pub volume: VolumeColumns,
    pub signals: SignalColumns,
}

impl IndicatorFrame {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// 숫자 지표 열 (내보내기 순서)
    pub fn numeric_columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("SMA_50", self.trend.sma_short.as_slice()),
            ("SMA_200", self.trend.sma_long.as_slice()),
            ("EMA_50", self.trend.ema.as_slice()),
            ("Daily Return", self.momentum.daily_return.as_slice()),
            ("MACD", self.momentum.macd.as_slice()),
            ("Signal Line", self.momentum.signal_line.as_slice()),
            ("RSI", self.momentum.rsi.as_slice()),
            ("Upper Band", self.volatility.upper_band.as_slice()),
            ("Lower Band", self.volatility.lower_band.as_slice()),
            ("VWAP", self.volume.vwap.as_slice()),
            ("TR", self.volatility.true_range.as_slice()),
            ("ATR", self.volatility.atr.as_slice()),
            ("ADX", self.volatility.adx.as_slice()),
        ]
    }

    /// 불리언 신호 열
    pub fn flag_columns(&self) -> Vec<(&'static str, &[bool])> {
        vec![
            ("Buy Signal", self.signals.buy.as_slice()),
            ("Sell Signal", self.signals.sell.as_slice()),
        ]
    }

    pub fn last_close(&self) -> Option<f64> {
        self.series.close().last().copied()
    }

    pub fn last_rsi(&self) -> Option<f64> {
        self.momentum.rsi.last().copied()
    }
}
