/**
* filename : params
* author : HAMA
* date: 2026. 10. 18.
* description: 지표 파라미터
**/

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// 지표 창 크기와 신호 임계값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
  pub sma_short_window: usize,
  pub sma_long_window: usize,
  pub ema_span: usize,
  pub macd_fast_span: usize,
  pub macd_slow_span: usize,
  pub macd_signal_span: usize,
  pub rsi_period: usize,
  pub band_std_window: usize,
  pub band_multiplier: f64,
  pub atr_period: usize,
  pub adx_period: usize,
  pub rsi_oversold: f64,
  pub rsi_overbought: f64,
}

impl Default for IndicatorParams {
  fn default() -> Self {
    IndicatorParams {
      sma_short_window: 50,
      sma_long_window: 200,
      ema_span: 50,
      macd_fast_span: 12,
      macd_slow_span: 26,
      macd_signal_span: 9,
      rsi_period: 14,
      band_std_window: 20,
      band_multiplier: 2.0,
      atr_period: 14,
      adx_period: 14,
      rsi_oversold: 30.0,
      rsi_overbought: 70.0,
    }
  }
}

impl IndicatorParams {
  pub fn validate(&self) -> Result<(), AnalysisError> {
    let windows = [
      ("sma_short_window", self.sma_short_window),
      ("sma_long_window", self.sma_long_window),
      ("ema_span", self.ema_span),
      ("macd_fast_span", self.macd_fast_span),
      ("macd_slow_span", self.macd_slow_span),
      ("macd_signal_span", self.macd_signal_span),
      ("rsi_period", self.rsi_period),
      ("atr_period", self.atr_period),
      ("adx_period", self.adx_period),
    ];

    for (name, window) in windows {
      if window == 0 {
        return Err(AnalysisError::InvalidParameter(format!("{} must be positive", name)));
      }
    }

    // 표본 표준편차는 값이 두 개 이상 필요
    if self.band_std_window < 2 {
      return Err(AnalysisError::InvalidParameter(
        "band_std_window must be at least 2".to_string(),
      ));
    }

    if !self.band_multiplier.is_finite() || self.band_multiplier < 0.0 {
      return Err(AnalysisError::InvalidParameter(format!(
        "band_multiplier must be a non-negative number, got {}",
        self.band_multiplier
      )));
    }

    // 과매도 < 과매수 이어야 매수/매도 신호가 동시에 켜지지 않는다
    if !(self.rsi_oversold < self.rsi_overbought) {
      return Err(AnalysisError::InvalidParameter(format!(
        "rsi_oversold ({}) must be below rsi_overbought ({})",
        self.rsi_oversold, self.rsi_overbought
      )));
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rstest::rstest;

  #[test]
  fn test_default_is_valid() {
    assert!(IndicatorParams::default().validate().is_ok());
  }

  #[rstest]
  #[case(IndicatorParams { sma_short_window: 0, ..IndicatorParams::default() })]
  #[case(IndicatorParams { macd_signal_span: 0, ..IndicatorParams::default() })]
  #[case(IndicatorParams { band_std_window: 1, ..IndicatorParams::default() })]
  #[case(IndicatorParams { band_multiplier: f64::NAN, ..IndicatorParams::default() })]
  #[case(IndicatorParams { band_multiplier: -1.0, ..IndicatorParams::default() })]
  #[case(IndicatorParams { rsi_oversold: 70.0, rsi_overbought: 30.0, ..IndicatorParams::default() })]
  #[case(IndicatorParams { rsi_oversold: 50.0, rsi_overbought: 50.0, ..IndicatorParams::default() })]
  fn test_invalid_params(#[case] params: IndicatorParams) {
    assert!(matches!(params.validate(), Err(AnalysisError::InvalidParameter(_))));
  }

  #[test]
  fn test_partial_json_uses_defaults() {
    let params: IndicatorParams = serde_json::from_str(r#"{"rsi_period": 10}"#).unwrap();

    assert_eq!(params.rsi_period, 10);
    assert_eq!(params.sma_short_window, 50);
    assert_eq!(params.band_multiplier, 2.0);
  }
}
