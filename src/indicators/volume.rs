/**
* filename : volume
* author : HAMA
* date: 2025. 5. 11.
* description: 거래량 지표 (누적 VWAP)
**/

use super::safe_div;

/// 누적 거래량 가중 평균 가격
///
/// 시계열 시작부터의 sum(close * volume) / sum(volume). 창이 없다.
#[derive(Debug, Default)]
pub struct VolumeWeightedAveragePrice {
  cumulative_price_volume: f64,
  cumulative_volume: f64,
  count: usize,
}

impl VolumeWeightedAveragePrice {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn update(&mut self, price: f64, volume: f64) {
    self.cumulative_price_volume += price * volume;
    self.cumulative_volume += volume;
    self.count += 1;
  }

  /// 누적 거래량이 0이면 NaN
  pub fn value(&self) -> f64 {
    safe_div(self.cumulative_price_volume, self.cumulative_volume)
  }

  pub fn cumulative_volume(&self) -> f64 {
    self.cumulative_volume
  }

  pub fn is_ready(&self) -> bool {
    self.count > 0 && self.cumulative_volume != 0.0
  }

  pub fn reset(&mut self) {
    *self = Self::default();
  }
}

pub fn vwap(close: &[f64], volume: &[f64]) -> Vec<f64> {
  let mut indicator = VolumeWeightedAveragePrice::new();

  close
    .iter()
    .zip(volume.iter())
    .map(|(price, vol)| {
      indicator.update(*price, *vol);
      indicator.value()
    })
    .collect()
}

/// 거래량 모듈 출력 열
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeColumns {
  pub vwap: Vec<f64>,
}

impl VolumeColumns {
  pub fn compute(close: &[f64], volume: &[f64]) -> Self {
    let vwap = vwap(close, volume);

    if vwap.first().map_or(false, |v| v.is_nan()) {
      log::warn!("거래량이 0인 구간에서 VWAP을 계산할 수 없습니다");
    }

    VolumeColumns { vwap }
  }
}
