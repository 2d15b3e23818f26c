use std::path::PathBuf;
use chrono::NaiveDate;

use crate::error::AnalysisError;
use crate::models::bar::Bar;
use super::HistoricalDataProvider;

/// 단일 CSV 파일 일봉 제공자
///
/// 헤더: `date,open,high,low,close,volume` (날짜는 YYYY-MM-DD).
pub struct CsvDataProvider {
    path: PathBuf,
    delimiter: u8,
}

impl CsvDataProvider {
    pub fn new(path: PathBuf, delimiter: char) -> Result<Self, AnalysisError> {
        if !delimiter.is_ascii() {
            return Err(AnalysisError::InvalidParameter(format!(
                "CSV delimiter must be ASCII, got '{}'",
                delimiter
            )));
        }

        Ok(Self { path, delimiter: delimiter as u8 })
    }
}

impl HistoricalDataProvider for CsvDataProvider {
    fn available_symbols(&self) -> Vec<String> {
        // Single-file CSV provider: infer symbol from filename
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| vec![s.to_uppercase()])
            .unwrap_or_default()
    }

    fn load_data(
        &self,
        _symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, AnalysisError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut result = Vec::new();
        for (line, rec) in rdr.deserialize().enumerate() {
            let row: CsvRow = rec.map_err(|e| AnalysisError::ParseError(format!("row {}: {}", line + 1, e)))?;
            if row.date >= start && row.date <= end {
                result.push(Bar::new(row.date, row.open, row.high, row.low, row.close, row.volume));
            }
        }

        // 날짜 오름차순 정렬, 중복 날짜는 거부
        result.sort_by_key(|bar| bar.date);
        if let Some(pair) = result.windows(2).find(|pair| pair[0].date == pair[1].date) {
            return Err(AnalysisError::ParseError(format!(
                "duplicate date {} in {}",
                pair[0].date,
                self.path.display()
            )));
        }

        log::info!("CSV에서 {}개 봉 로드: {}", result.len(), self.path.display());
        Ok(result)
    }
}

#[derive(serde::Deserialize)]
struct CsvRow {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}
