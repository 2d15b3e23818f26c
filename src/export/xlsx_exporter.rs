use std::path::PathBuf;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::AnalysisError;
use crate::models::frame::IndicatorFrame;
use crate::utils::format_date;
use super::{check_extension, ensure_parent, header, FrameExporter};

const SHEET_NAME: &str = "Indicators";

/// 엑셀(.xlsx) 내보내기
///
/// CSV와 같은 열 순서. NaN 셀은 비워 두고, 신호는 불리언 셀로 쓴다.
pub struct XlsxExporter {
    output: Output,
}

enum Output {
    /// 디렉터리 안에 `<TICKER>_indicators.xlsx`
    Directory(PathBuf),
    File(PathBuf),
}

impl XlsxExporter {
    pub fn to_directory(dir: impl Into<PathBuf>) -> Self {
        Self { output: Output::Directory(dir.into()) }
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self { output: Output::File(path.into()) }
    }

    pub fn default_file_name(ticker: &str) -> String {
        format!("{}_indicators.xlsx", ticker.trim().to_uppercase())
    }

    fn target_path(&self, ticker: &str) -> Result<PathBuf, AnalysisError> {
        match &self.output {
            Output::Directory(dir) => Ok(dir.join(Self::default_file_name(ticker))),
            Output::File(path) => {
                check_extension(path, "xlsx")?;
                Ok(path.clone())
            }
        }
    }

    /// 워크시트 하나에 프레임 기록
    pub fn write_sheet(frame: &IndicatorFrame, worksheet: &mut Worksheet) -> Result<(), AnalysisError> {
        worksheet.set_name(SHEET_NAME)?;

        let bold = Format::new().set_bold();
        for (col, name) in header(frame).into_iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, name, &bold)?;
        }

        let series = &frame.series;
        let numeric = frame.numeric_columns();
        let flags = frame.flag_columns();
        let prices = [series.open(), series.high(), series.low(), series.close(), series.volume()];

        for i in 0..frame.len() {
            let row = (i + 1) as u32;
            worksheet.write_string(row, 0, format_date(series.dates()[i]))?;

            let values = prices
                .iter()
                .copied()
                .chain(numeric.iter().map(|(_, column)| *column))
                .map(|column| column[i]);

            let mut col: u16 = 1;
            for value in values {
                if !value.is_nan() {
                    worksheet.write_number(row, col, value)?;
                }
                col += 1;
            }

            for (_, column) in &flags {
                worksheet.write_boolean(row, col, column[i])?;
                col += 1;
            }
        }

        Ok(())
    }
}

impl FrameExporter for XlsxExporter {
    fn export(&self, frame: &IndicatorFrame, ticker: &str) -> Result<PathBuf, AnalysisError> {
        let path = self.target_path(ticker)?;
        ensure_parent(&path)?;

        let mut workbook = Workbook::new();
        Self::write_sheet(frame, workbook.add_worksheet())?;
        workbook.save(&path)?;

        log::info!("{} 엑셀 저장 완료: {}", ticker, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::indicators::compute_indicators;
    use crate::models::bar::Bar;
    use crate::models::series::Series;

    fn frame(rows: usize) -> IndicatorFrame {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars: Vec<Bar> = (0..rows)
            .map(|i| Bar::flat(start + chrono::Duration::days(i as i64), 100.0 + i as f64, 1000.0))
            .collect();
        compute_indicators(&Series::from_bars(&bars)).unwrap()
    }

    #[test]
    fn test_export_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = XlsxExporter::to_directory(dir.path().join("out"));

        let path = exporter.export(&frame(60), "aapl").unwrap();
        assert_eq!(path, dir.path().join("out").join("AAPL_indicators.xlsx"));

        // xlsx는 zip 컨테이너
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_rejects_other_extension() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("AAPL.csv");

        let result = XlsxExporter::to_file(&target).export(&frame(2), "AAPL");
        assert!(matches!(result, Err(AnalysisError::InvalidParameter(_))));
        assert!(!target.exists());
    }
}
