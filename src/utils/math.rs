//! 수학 관련 유틸리티

/// 부동소수점 비교 허용 오차
pub const EPSILON: f64 = 1e-9;

/// 두 값이 허용 오차 안에서 같은지 확인 (NaN끼리는 같다고 본다)
pub fn approx_eq(a: f64, b: f64) -> bool {
  if a.is_nan() || b.is_nan() {
    return a.is_nan() && b.is_nan();
  }

  (a - b).abs() <= EPSILON * 1f64.max(a.abs()).max(b.abs())
}

/// 가격 단위 반올림
pub fn round_price(price: f64, tick_size: f64) -> f64 {
  (price / tick_size).round() * tick_size
}
