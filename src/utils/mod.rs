//! 날짜 관련 유틸리티
//!
//! 날짜 파싱, 포맷팅, 거래일 계산 함수 제공

pub mod logging;
pub mod math;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::AnalysisError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// "YYYY-MM-DD" 문자열을 날짜로 변환
pub fn parse_date(value: &str) -> Result<NaiveDate, AnalysisError> {
  NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
    .map_err(|e| AnalysisError::ParseError(format!("invalid date '{}': {}", value, e)))
}

/// 날짜를 "YYYY-MM-DD" 문자열로 변환
pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

/// 주말을 제외한 거래일인지 확인 (공휴일은 고려하지 않음)
pub fn is_trading_day(date: NaiveDate) -> bool {
  !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 구간 [start, end] 안의 거래일 목록
pub fn trading_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
  start
    .iter_days()
    .take_while(|d| *d <= end)
    .filter(|d| is_trading_day(*d))
    .collect()
}
