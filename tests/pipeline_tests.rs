//! 분석 파이프라인 통합 테스트 (CSV 입력 -> CSV 출력)

use std::io::Write;

use chrono::NaiveDate;
use xAnalyzer::analysis::{run_analysis, AnalysisRequest};
use xAnalyzer::data::CsvDataProvider;
use xAnalyzer::export::CsvExporter;
use xAnalyzer::indicators::IndicatorParams;
use xAnalyzer::AnalysisError;

fn write_input(rows: usize) -> tempfile::NamedTempFile {
  let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
  writeln!(file, "date,open,high,low,close,volume").unwrap();

  let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
  for i in 0..rows {
    let date = start + chrono::Duration::days(i as i64);
    let close = 100.0 + (i as f64 * 0.3).sin() * 10.0;
    writeln!(file, "{},{},{},{},{},{}", date, close, close + 1.0, close - 1.0, close, 1000 + i).unwrap();
  }

  file
}

#[test]
fn test_csv_round_trip_pipeline() {
  let input = write_input(80);
  let out_dir = tempfile::tempdir().unwrap();

  let provider = CsvDataProvider::new(input.path().to_path_buf(), ',').unwrap();
  let exporter = CsvExporter::to_directory(out_dir.path());
  let request = AnalysisRequest::new(
    "spy",
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
  )
  .unwrap();

  let (frame, summary) = run_analysis(&provider, Some(&exporter), &request, &IndicatorParams::default()).unwrap();

  assert_eq!(frame.len(), 80);
  let path = summary.output_path.unwrap();
  assert_eq!(path.file_name().unwrap(), "SPY_indicators.csv");

  let mut reader = csv::Reader::from_path(&path).unwrap();
  let headers = reader.headers().unwrap().clone();
  assert_eq!(headers.len(), 21);
  assert_eq!(&headers[0], "Date");
  assert_eq!(&headers[6], "SMA_50");

  let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
  assert_eq!(records.len(), 80);
  // 49번째 행 이전에는 SMA_50 없음
  assert_eq!(&records[48][6], "");
  assert!(!records[49][6].is_empty());
  assert!(records.iter().all(|r| &r[19] == "True" || &r[19] == "False"));
}

#[test]
fn test_out_of_range_request_is_not_found() {
  let input = write_input(10);
  let provider = CsvDataProvider::new(input.path().to_path_buf(), ',').unwrap();
  let request = AnalysisRequest::new(
    "SPY",
    NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
    NaiveDate::from_ymd_opt(2030, 2, 1).unwrap(),
  )
  .unwrap();

  let result = run_analysis(&provider, None, &request, &IndicatorParams::default());
  assert!(matches!(result, Err(AnalysisError::DataNotFound(_))));
}
