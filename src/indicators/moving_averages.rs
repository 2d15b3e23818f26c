/**
* filename : moving_averages
* author : HAMA
* date: 2025. 5. 11.
* description: 추세 지표 (SMA, EMA)
**/

use std::collections::VecDeque;
use statrs::statistics::Statistics;

use super::{apply, Indicator, IndicatorParams};

/// 단순 이동평균
///
/// 최근 `period`개 값의 산술평균. 값이 `period`개 쌓이기 전에는 NaN이고,
/// 창 안에 NaN이 하나라도 있으면 NaN이다.
#[derive(Debug)]
pub struct SimpleMovingAverage {
  name: String,
  period: usize,
  values: VecDeque<f64>,
}

impl SimpleMovingAverage {
  pub fn new(period: usize) -> Self {
    SimpleMovingAverage {
      name: format!("SMA-{}", period),
      period,
      values: VecDeque::with_capacity(period + 1),
    }
  }

  pub fn period(&self) -> usize {
    self.period
  }
}

impl Indicator for SimpleMovingAverage {
  fn name(&self) -> &str {
    &self.name
  }

  fn update(&mut self, value: f64) {
    self.values.push_back(value);

    // 오래된 값 제거
    if self.values.len() > self.period {
      self.values.pop_front();
    }
  }

  fn value(&self) -> f64 {
    if !self.is_ready() || self.values.iter().any(|v| v.is_nan()) {
      return f64::NAN;
    }

    // 누적합 대신 매번 창 전체를 더한다 (상수 입력에서 정확히 같은 값이 나오도록)
    self.values.iter().sum::<f64>() / self.period as f64
  }

  fn is_ready(&self) -> bool {
    self.period > 0 && self.values.len() >= self.period
  }

  fn reset(&mut self) {
    self.values.clear();
  }
}

/// 지수 이동평균
///
/// `alpha = 2 / (span + 1)`. 첫 값으로 시드하며 워밍업 구간이 없다:
/// `EMA[0] = x[0]`, `EMA[i] = alpha * x[i] + (1 - alpha) * EMA[i-1]`.
#[derive(Debug)]
pub struct ExponentialMovingAverage {
  name: String,
  span: usize,
  alpha: f64,
  current_ema: Option<f64>,
}

impl ExponentialMovingAverage {
  pub fn new(span: usize) -> Self {
    let alpha = 2.0 / (span as f64 + 1.0);

    ExponentialMovingAverage {
      name: format!("EMA-{}", span),
      span,
      alpha,
      current_ema: None,
    }
  }

  pub fn span(&self) -> usize {
    self.span
  }

  pub fn alpha(&self) -> f64 {
    self.alpha
  }
}

impl Indicator for ExponentialMovingAverage {
  fn name(&self) -> &str {
    &self.name
  }

  fn update(&mut self, value: f64) {
    let next = match self.current_ema {
      None => value,
      Some(prev_ema) => self.alpha * value + (1.0 - self.alpha) * prev_ema,
    };

    self.current_ema = Some(next);
  }

  fn value(&self) -> f64 {
    self.current_ema.unwrap_or(f64::NAN)
  }

  fn is_ready(&self) -> bool {
    self.current_ema.is_some()
  }

  fn reset(&mut self) {
    self.current_ema = None;
  }
}

/// 시계열 전체에 대한 SMA
pub fn sma(values: &[f64], window: usize) -> Vec<f64> {
  apply(&mut SimpleMovingAverage::new(window), values)
}

/// 시계열 전체에 대한 EMA
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
  apply(&mut ExponentialMovingAverage::new(span), values)
}

/// 최근 `window`개 값의 표본 표준편차 (n - 1)
///
/// 값이 부족하거나 창 안에 NaN이 있으면 NaN.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
  let mut result = vec![f64::NAN; values.len()];

  if window == 0 {
    return result;
  }

  for i in (window - 1)..values.len() {
    // statrs는 값이 두 개 미만이거나 NaN이 섞이면 NaN을 돌려준다
    result[i] = values[i + 1 - window..=i].iter().std_dev();
  }

  result
}

/// 추세 모듈 출력 열
#[derive(Debug, Clone, PartialEq)]
pub struct TrendColumns {
  pub sma_short: Vec<f64>,
  pub sma_long: Vec<f64>,
  pub ema: Vec<f64>,
}

impl TrendColumns {
  pub fn compute(close: &[f64], params: &IndicatorParams) -> Self {
    TrendColumns {
      sma_short: sma(close, params.sma_short_window),
      sma_long: sma(close, params.sma_long_window),
      ema: ema(close, params.ema_span),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::math::approx_eq;

  #[test]
  fn test_sma_basic() {
    let result = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);

    assert!(result[0].is_nan());
    assert!(result[1].is_nan());
    assert!(approx_eq(result[2], 2.0));
    assert!(approx_eq(result[3], 3.0));
    assert!(approx_eq(result[4], 4.0));
  }

  #[test]
  fn test_sma_shorter_than_window_is_all_nan() {
    let values: Vec<f64> = (0..49).map(|i| 100.0 + i as f64).collect();
    let result = sma(&values, 50);

    assert_eq!(result.len(), values.len());
    assert!(result.iter().all(|v| v.is_nan()));
  }

  #[test]
  fn test_sma_nan_in_window() {
    let result = sma(&[f64::NAN, 2.0, 4.0, 6.0], 2);

    assert!(result[0].is_nan());
    assert!(result[1].is_nan());
    assert!(approx_eq(result[2], 3.0));
    assert!(approx_eq(result[3], 5.0));
  }

  #[test]
  fn test_sma_zero_window() {
    let result = sma(&[1.0, 2.0], 0);
    assert!(result.iter().all(|v| v.is_nan()));
  }

  #[test]
  fn test_ema_seeded_with_first_value() {
    let result = ema(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);

    // alpha = 0.5
    assert_eq!(result[0], 1.0);
    assert!(approx_eq(result[1], 1.5));
    assert!(approx_eq(result[2], 2.25));
    assert!(approx_eq(result[3], 3.125));
    assert!(approx_eq(result[4], 4.0625));
  }

  #[test]
  fn test_ema_first_value_for_any_span() {
    for span in [1, 2, 9, 12, 26, 50, 200] {
      let result = ema(&[42.5, 10.0, 7.0], span);
      assert_eq!(result[0], 42.5);
    }
  }

  #[test]
  fn test_ema_constant_input() {
    let result = ema(&vec![5.0; 30], 12);
    assert!(result.iter().all(|v| *v == 5.0));
  }

  #[test]
  fn test_ema_reset() {
    let mut ema = ExponentialMovingAverage::new(9);
    ema.update(10.0);
    ema.update(20.0);
    assert!(ema.is_ready());
    assert_eq!(ema.name(), "EMA-9");
    assert!(approx_eq(ema.alpha(), 0.2));

    ema.reset();
    assert!(!ema.is_ready());
    assert!(ema.value().is_nan());

    ema.update(3.0);
    assert_eq!(ema.value(), 3.0);
  }

  #[test]
  fn test_rolling_std_sample() {
    let result = rolling_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 8);

    assert!(result[..7].iter().all(|v| v.is_nan()));
    // 표본 분산 = 32 / 7
    assert!(approx_eq(result[7], (32.0f64 / 7.0).sqrt()));
  }

  #[test]
  fn test_rolling_std_constant_is_zero() {
    let result = rolling_std(&vec![100.0; 25], 20);
    assert!(result[18].is_nan());
    assert_eq!(result[19], 0.0);
    assert_eq!(result[24], 0.0);
  }
}
