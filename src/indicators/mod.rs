/**
* filename : mod
* author : HAMA
* date: 2025. 5. 11.
* description: 지표 계산 엔진
**/
pub mod moving_averages;
pub mod oscillators;
pub mod params;
pub mod signals;
pub mod volatility;
pub mod volume;
pub mod utils;

pub use moving_averages::*;
pub use oscillators::*;
pub use params::*;
pub use signals::*;
pub use volatility::*;
pub use volume::*;
pub use utils::*;

use std::fmt::Debug;

use crate::error::AnalysisError;
use crate::models::frame::IndicatorFrame;
use crate::models::series::Series;

/// 값을 하나씩 받아 갱신되는 인과적(causal) 지표
///
/// `value()`는 지금까지 들어온 값만으로 계산되며, 아직 정의되지 않으면 NaN.
pub trait Indicator: Debug {
  fn name(&self) -> &str;

  // 새로운 값으로 지표 업데이트
  fn update(&mut self, value: f64);

  // 현재 지표 값 (정의되지 않으면 NaN)
  fn value(&self) -> f64;

  // 지표가 계산 가능한지 (충분한 데이터가 있는지) 확인
  fn is_ready(&self) -> bool;

  // 지표 상태 리셋
  fn reset(&mut self);
}

/// 기본 파라미터로 모든 지표 계산
pub fn compute_indicators(series: &Series) -> Result<IndicatorFrame, AnalysisError> {
  compute_indicators_with(series, &IndicatorParams::default())
}

/// 주어진 파라미터로 모든 지표 계산
///
/// 계산 순서는 고정: 추세 -> 모멘텀 -> 변동성(추세의 SMA 사용) -> 거래량 -> 신호(모멘텀 사용).
pub fn compute_indicators_with(
  series: &Series,
  params: &IndicatorParams,
) -> Result<IndicatorFrame, AnalysisError> {
  series.validate()?;
  params.validate()?;

  let trend = TrendColumns::compute(series.close(), params);
  log::debug!("추세 지표 계산 완료: {} 행", series.len());

  let momentum = MomentumColumns::compute(series.close(), params);
  log::debug!("모멘텀 지표 계산 완료");

  let volatility = VolatilityColumns::compute(series, &trend, params);
  log::debug!("변동성 지표 계산 완료");

  let volume = VolumeColumns::compute(series.close(), series.volume());
  log::debug!("거래량 지표 계산 완료");

  let signals = SignalColumns::compute(&momentum, params);
  log::debug!(
    "신호 계산 완료: 매수 {} / 매도 {}",
    signals.buy_count(),
    signals.sell_count()
  );

  Ok(IndicatorFrame {
    series: series.clone(),
    trend,
    momentum,
    volatility,
    volume,
    signals,
  })
}
