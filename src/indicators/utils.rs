/**
* filename : utils
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use super::Indicator;

// 시계열 전체를 지표에 흘려보내고 각 시점의 값을 모은다
pub fn apply<I: Indicator + ?Sized>(indicator: &mut I, values: &[f64]) -> Vec<f64> {
  let mut result = Vec::with_capacity(values.len());

  for value in values {
    indicator.update(*value);
    result.push(indicator.value());
  }

  result
}

/// 어느 한쪽이라도 NaN이면 항상 false
pub fn less_than(a: f64, b: f64) -> bool {
  !a.is_nan() && !b.is_nan() && a < b
}

pub fn greater_than(a: f64, b: f64) -> bool {
  !a.is_nan() && !b.is_nan() && a > b
}

/// 분모가 0이거나 NaN이면 NaN을 돌려주는 나눗셈
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
  if denominator == 0.0 || denominator.is_nan() || numerator.is_nan() {
    f64::NAN
  } else {
    numerator / denominator
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_nan_comparisons_are_false() {
    assert!(!less_than(f64::NAN, 30.0));
    assert!(!greater_than(f64::NAN, 70.0));
    assert!(!less_than(1.0, f64::NAN));
    assert!(!greater_than(1.0, f64::NAN));
    assert!(less_than(1.0, 2.0));
    assert!(greater_than(2.0, 1.0));
  }

  #[test]
  fn test_safe_div() {
    assert!(safe_div(1.0, 0.0).is_nan());
    assert!(safe_div(0.0, 0.0).is_nan());
    assert!(safe_div(f64::NAN, 2.0).is_nan());
    assert_eq!(safe_div(3.0, 2.0), 1.5);
  }
}
