/**
* filename : oscillators
* author : HAMA
* date: 2025. 5. 11.
* description: 모멘텀 지표 (MACD, RSI, 일간 수익률)
**/

use std::collections::VecDeque;

use super::{apply, safe_div, ExponentialMovingAverage, Indicator, IndicatorParams};

/// MACD 라인과 시그널 라인
///
/// MACD = EMA(fast) - EMA(slow), 시그널 = MACD의 EMA(signal).
/// 세 EMA 모두 첫 값으로 시드하므로 첫 봉부터 값이 있다.
#[derive(Debug)]
pub struct MACD {
  name: String,
  fast_ema: ExponentialMovingAverage,
  slow_ema: ExponentialMovingAverage,
  signal_ema: ExponentialMovingAverage,
}

impl MACD {
  pub fn new(fast_span: usize, slow_span: usize, signal_span: usize) -> Self {
    MACD {
      name: format!("MACD-{}-{}-{}", fast_span, slow_span, signal_span),
      fast_ema: ExponentialMovingAverage::new(fast_span),
      slow_ema: ExponentialMovingAverage::new(slow_span),
      signal_ema: ExponentialMovingAverage::new(signal_span),
    }
  }

  pub fn macd_line(&self) -> f64 {
    self.fast_ema.value() - self.slow_ema.value()
  }

  pub fn signal_line(&self) -> f64 {
    self.signal_ema.value()
  }
}

impl Indicator for MACD {
  fn name(&self) -> &str {
    &self.name
  }

  fn update(&mut self, price: f64) {
    self.fast_ema.update(price);
    self.slow_ema.update(price);

    // 시그널 라인은 MACD 라인 자체의 EMA
    let macd_line = self.macd_line();
    self.signal_ema.update(macd_line);
  }

  /// 대표값은 MACD 라인
  fn value(&self) -> f64 {
    self.macd_line()
  }

  fn is_ready(&self) -> bool {
    self.fast_ema.is_ready() && self.slow_ema.is_ready() && self.signal_ema.is_ready()
  }

  fn reset(&mut self) {
    self.fast_ema.reset();
    self.slow_ema.reset();
    self.signal_ema.reset();
  }
}

/// 상대강도지수
///
/// 상승폭/하락폭의 최근 `period`개 단순평균으로 계산한다 (Wilder 평활 아님).
/// 가격 변화가 `period`개 쌓인 시점, 즉 `period`번째 봉부터 값이 있다.
#[derive(Debug)]
pub struct RelativeStrengthIndex {
  name: String,
  period: usize,
  gains: VecDeque<f64>,
  losses: VecDeque<f64>,
  prev_price: Option<f64>,
}

impl RelativeStrengthIndex {
  pub fn new(period: usize) -> Self {
    RelativeStrengthIndex {
      name: format!("RSI-{}", period),
      period,
      gains: VecDeque::with_capacity(period + 1),
      losses: VecDeque::with_capacity(period + 1),
      prev_price: None,
    }
  }

  pub fn period(&self) -> usize {
    self.period
  }

  pub fn average_gain(&self) -> f64 {
    window_mean(&self.gains, self.period)
  }

  pub fn average_loss(&self) -> f64 {
    window_mean(&self.losses, self.period)
  }
}

impl Indicator for RelativeStrengthIndex {
  fn name(&self) -> &str {
    &self.name
  }

  fn update(&mut self, price: f64) {
    // 이전 가격과 비교하여 gain/loss 계산
    if let Some(prev_price) = self.prev_price {
      let change = price - prev_price;

      // NaN 변화량은 NaN으로 남겨 창 전체를 무효화한다
      let (gain, loss) = if change.is_nan() {
        (f64::NAN, f64::NAN)
      } else {
        (change.max(0.0), (-change).max(0.0))
      };

      self.gains.push_back(gain);
      self.losses.push_back(loss);

      // 오래된 데이터 제거
      if self.gains.len() > self.period {
        self.gains.pop_front();
        self.losses.pop_front();
      }
    }

    self.prev_price = Some(price);
  }

  fn value(&self) -> f64 {
    if !self.is_ready() {
      return f64::NAN;
    }

    rsi_from_averages(self.average_gain(), self.average_loss())
  }

  fn is_ready(&self) -> bool {
    self.period > 0 && self.gains.len() >= self.period
  }

  fn reset(&mut self) {
    self.gains.clear();
    self.losses.clear();
    self.prev_price = None;
  }
}

fn window_mean(values: &VecDeque<f64>, period: usize) -> f64 {
  if period == 0 || values.len() < period {
    return f64::NAN;
  }

  values.iter().sum::<f64>() / period as f64
}

/// 평균 상승폭/하락폭으로 RSI 계산
///
/// - 하락 없이 상승만 있으면 정확히 100
/// - 상승 없이 하락만 있으면 정확히 0
/// - 둘 다 0이면 (가격 변화 없음) NaN
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
  if avg_gain.is_nan() || avg_loss.is_nan() {
    return f64::NAN;
  }

  if avg_loss == 0.0 {
    return if avg_gain > 0.0 { 100.0 } else { f64::NAN };
  }

  if avg_gain == 0.0 {
    return 0.0;
  }

  // RSI = 100 - (100 / (1 + RS))
  let rs = avg_gain / avg_loss;
  100.0 - (100.0 / (1.0 + rs))
}

/// MACD 라인과 시그널 라인 열
pub fn macd(close: &[f64], fast_span: usize, slow_span: usize, signal_span: usize) -> (Vec<f64>, Vec<f64>) {
  let mut indicator = MACD::new(fast_span, slow_span, signal_span);
  let mut macd_line = Vec::with_capacity(close.len());
  let mut signal_line = Vec::with_capacity(close.len());

  for price in close {
    indicator.update(*price);
    macd_line.push(indicator.macd_line());
    signal_line.push(indicator.signal_line());
  }

  (macd_line, signal_line)
}

pub fn rsi(close: &[f64], period: usize) -> Vec<f64> {
  apply(&mut RelativeStrengthIndex::new(period), close)
}

/// 일간 수익률: close[i] / close[i-1] - 1
///
/// 첫 봉과 전일 종가가 0인 봉은 NaN.
pub fn daily_returns(close: &[f64]) -> Vec<f64> {
  let mut result = Vec::with_capacity(close.len());

  if !close.is_empty() {
    result.push(f64::NAN);
  }

  for pair in close.windows(2) {
    result.push(safe_div(pair[1], pair[0]) - 1.0);
  }

  result
}

/// 모멘텀 모듈 출력 열
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumColumns {
  pub macd: Vec<f64>,
  pub signal_line: Vec<f64>,
  pub rsi: Vec<f64>,
  pub daily_return: Vec<f64>,
}

impl MomentumColumns {
  pub fn compute(close: &[f64], params: &IndicatorParams) -> Self {
    let (macd_line, signal_line) = macd(
      close,
      params.macd_fast_span,
      params.macd_slow_span,
      params.macd_signal_span,
    );

    MomentumColumns {
      macd: macd_line,
      signal_line,
      rsi: rsi(close, params.rsi_period),
      daily_return: daily_returns(close),
    }
  }
}
