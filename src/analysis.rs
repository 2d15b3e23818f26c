//! 분석 파이프라인
//!
//! 데이터 조회 -> 지표 계산 -> 내보내기를 한 번에 수행한다.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::HistoricalDataProvider;
use crate::error::AnalysisError;
use crate::export::FrameExporter;
use crate::indicators::{compute_indicators_with, IndicatorParams};
use crate::models::frame::IndicatorFrame;
use crate::models::series::Series;
use crate::utils::format_date;
use crate::utils::logging;

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalysisRequest {
    /// 티커는 공백 제거 후 대문자로 정규화
    pub fn new(ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<Self, AnalysisError> {
        let ticker = ticker.trim().to_uppercase();

        if ticker.is_empty() {
            return Err(AnalysisError::InvalidParameter("ticker is required".to_string()));
        }

        if start > end {
            return Err(AnalysisError::InvalidParameter(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }

        Ok(Self { ticker, start, end })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub ticker: String,
    pub rows: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub last_close: Option<f64>,
    pub last_rsi: Option<f64>,
    pub buy_signals: usize,
    pub sell_signals: usize,
    pub output_path: Option<PathBuf>,
}

impl AnalysisSummary {
    pub fn from_frame(ticker: &str, frame: &IndicatorFrame) -> Self {
        Self {
            ticker: ticker.to_string(),
            rows: frame.len(),
            first_date: frame.series.first_date(),
            last_date: frame.series.last_date(),
            last_close: frame.last_close(),
            last_rsi: frame.last_rsi().filter(|v| !v.is_nan()),
            buy_signals: frame.signals.buy_count(),
            sell_signals: frame.signals.sell_count(),
            output_path: None,
        }
    }

    pub fn summary(&self) -> String {
        let rsi = self
            .last_rsi
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "N/A".to_string());
        let close = self
            .last_close
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "N/A".to_string());
        let period = match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => format!("{} ~ {}", format_date(first), format_date(last)),
            _ => "N/A".to_string(),
        };

        format!(
            "=== {} ===\n기간: {}\n봉 수: {}\n마지막 종가: {}\n마지막 RSI: {}\n매수 신호: {}\n매도 신호: {}",
            self.ticker, period, self.rows, close, rsi, self.buy_signals, self.sell_signals
        )
    }
}

/// 조회한 데이터로 지표를 계산하고 내보낸다
///
/// 조회 결과가 비어 있으면 지표 엔진을 호출하지 않고 `DataNotFound`.
pub fn run_analysis(
    provider: &dyn HistoricalDataProvider,
    exporter: Option<&dyn FrameExporter>,
    request: &AnalysisRequest,
    params: &IndicatorParams,
) -> Result<(IndicatorFrame, AnalysisSummary), AnalysisError> {
    logging::log_analysis_start(&request.ticker, &format_date(request.start), &format_date(request.end));

    let bars = provider.load_data(&request.ticker, request.start, request.end)?;
    if bars.is_empty() {
        return Err(AnalysisError::DataNotFound(format!(
            "no data for {} between {} and {}",
            request.ticker, request.start, request.end
        )));
    }

    let series = Series::from_bars(&bars);
    let frame = compute_indicators_with(&series, params)?;
    let mut summary = AnalysisSummary::from_frame(&request.ticker, &frame);

    if let Some(exporter) = exporter {
        summary.output_path = Some(exporter.export(&frame, &request.ticker)?);
    }

    logging::log_analysis_end(&request.ticker, summary.rows, summary.buy_signals, summary.sell_signals);
    Ok((frame, summary))
}
