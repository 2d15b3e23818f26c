/**
* filename : volatility
* author : HAMA
* date: 2026. 10. 18.
* description: 변동성 지표 (볼린저 밴드, ATR, 추세 강도)
**/

use crate::models::series::Series;
use super::{rolling_std, safe_div, sma, IndicatorParams, TrendColumns};

/// 볼린저 밴드 상단/하단
///
/// 중심선은 추세 모듈의 SMA(50), 폭은 종가의 20봉 표본 표준편차.
/// 중심선과 표준편차의 창 크기가 다른 것은 의도된 동작이다.
pub fn bollinger_bands(
  middle: &[f64],
  close: &[f64],
  std_window: usize,
  multiplier: f64,
) -> (Vec<f64>, Vec<f64>) {
  let std_dev = rolling_std(close, std_window);

  middle
    .iter()
    .zip(std_dev.iter())
    .map(|(mid, sd)| {
      if mid.is_nan() || sd.is_nan() {
        (f64::NAN, f64::NAN)
      } else {
        (mid + multiplier * sd, mid - multiplier * sd)
      }
    })
    .unzip()
}

/// 단순화된 True Range: max(high, low) - low
///
/// 전일 종가 갭은 반영하지 않는다.
pub fn true_range_proxy(high: &[f64], low: &[f64]) -> Vec<f64> {
  high
    .iter()
    .zip(low.iter())
    .map(|(h, l)| {
      if h.is_nan() || l.is_nan() {
        f64::NAN
      } else {
        h.max(*l) - l
      }
    })
    .collect()
}

/// ATR = SMA(TR, period)
pub fn average_true_range(true_range: &[f64], period: usize) -> Vec<f64> {
  sma(true_range, period)
}

/// 추세 강도 = SMA(ATR, period) / ATR * 100
///
/// ATR이 0이면 NaN (변동이 전혀 없는 구간).
pub fn trend_strength(atr: &[f64], period: usize) -> Vec<f64> {
  let smoothed = sma(atr, period);

  smoothed
    .iter()
    .zip(atr.iter())
    .map(|(avg, current)| safe_div(*avg, *current) * 100.0)
    .collect()
}

/// 변동성 모듈 출력 열
#[derive(Debug, Clone, PartialEq)]
pub struct VolatilityColumns {
  pub upper_band: Vec<f64>,
  pub lower_band: Vec<f64>,
  pub true_range: Vec<f64>,
  pub atr: Vec<f64>,
  pub adx: Vec<f64>,
}

impl VolatilityColumns {
  pub fn compute(series: &Series, trend: &TrendColumns, params: &IndicatorParams) -> Self {
    let (upper_band, lower_band) = bollinger_bands(
      &trend.sma_short,
      series.close(),
      params.band_std_window,
      params.band_multiplier,
    );

    let true_range = true_range_proxy(series.high(), series.low());
    let atr = average_true_range(&true_range, params.atr_period);
    let adx = trend_strength(&atr, params.adx_period);

    if atr.iter().any(|v| *v == 0.0) {
      log::warn!("ATR이 0인 구간이 있어 추세 강도를 NaN으로 처리합니다");
    }

    VolatilityColumns {
      upper_band,
      lower_band,
      true_range,
      atr,
      adx,
    }
  }
}
