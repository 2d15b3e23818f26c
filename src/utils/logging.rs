//! 로깅 유틸리티
//!
//! 로그 초기화 및 유틸리티 함수 제공

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;
use std::fs::OpenOptions;

use crate::error::AnalysisError;

/// 로그 레벨 문자열 파싱 (알 수 없으면 Info)
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// 로깅 시스템 초기화
///
/// RUST_LOG 환경변수가 있으면 설정 파일의 레벨보다 우선한다.
/// `file_path`가 있으면 stderr 대신 해당 파일 끝에 기록한다.
pub fn init(default_level: &str, file_path: Option<&str>) -> Result<(), AnalysisError> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

    let mut builder = Builder::new();
    builder
        .filter_level(parse_level(&log_level))
        .format_timestamp_millis();

    if let Some(path) = file_path {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .map_err(|e| AnalysisError::ConfigError(format!("Failed to initialize logger: {}", e)))?;

    log::info!("로깅 시스템 초기화 완료: 레벨 = {}", log_level);

    Ok(())
}

/// 분석 시작 로그
pub fn log_analysis_start(ticker: &str, start: &str, end: &str) {
    log::info!("분석 시작: {} - 기간: {} ~ {}", ticker, start, end);
}

/// 분석 종료 로그
pub fn log_analysis_end(ticker: &str, rows: usize, buy: usize, sell: usize) {
    log::info!("분석 종료: {} - 행: {} - 매수 신호: {} - 매도 신호: {}", ticker, rows, buy, sell);
}

/// 오류 로그
pub fn log_error(context: &str, error: &AnalysisError) {
    log::error!("오류 발생 - {}: {}", context, error);
}
