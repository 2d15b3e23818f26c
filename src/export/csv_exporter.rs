use std::io::Write;
use std::path::PathBuf;

use crate::error::AnalysisError;
use crate::models::frame::IndicatorFrame;
use crate::utils::format_date;
use super::{check_extension, ensure_parent, header, FrameExporter};

/// CSV 내보내기
///
/// 첫 행은 열 이름, 이후 봉마다 한 행. NaN은 빈 칸, 신호는 True/False.
pub struct CsvExporter {
    output: Output,
}

enum Output {
    /// 디렉터리 안에 `<TICKER>_indicators.csv`
    Directory(PathBuf),
    File(PathBuf),
}

impl CsvExporter {
    pub fn to_directory(dir: impl Into<PathBuf>) -> Self {
        Self { output: Output::Directory(dir.into()) }
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self { output: Output::File(path.into()) }
    }

    pub fn default_file_name(ticker: &str) -> String {
        format!("{}_indicators.csv", ticker.trim().to_uppercase())
    }

    fn target_path(&self, ticker: &str) -> Result<PathBuf, AnalysisError> {
        match &self.output {
            Output::Directory(dir) => Ok(dir.join(Self::default_file_name(ticker))),
            Output::File(path) => {
                check_extension(path, "csv")?;
                Ok(path.clone())
            }
        }
    }

    /// 임의의 writer에 프레임 기록
    pub fn write_frame<W: Write>(frame: &IndicatorFrame, writer: W) -> Result<(), AnalysisError> {
        let mut wtr = csv::Writer::from_writer(writer);

        let numeric = frame.numeric_columns();
        let flags = frame.flag_columns();

        let names = header(frame);
        wtr.write_record(&names)?;

        let series = &frame.series;
        for i in 0..frame.len() {
            let mut record = Vec::with_capacity(names.len());
            record.push(format_date(series.dates()[i]));
            for column in [series.open(), series.high(), series.low(), series.close(), series.volume()] {
                record.push(format_number(column[i]));
            }
            for (_, column) in &numeric {
                record.push(format_number(column[i]));
            }
            for (_, column) in &flags {
                record.push(format_flag(column[i]));
            }
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

impl FrameExporter for CsvExporter {
    fn export(&self, frame: &IndicatorFrame, ticker: &str) -> Result<PathBuf, AnalysisError> {
        let path = self.target_path(ticker)?;
        ensure_parent(&path)?;

        let file = std::fs::File::create(&path)?;
        Self::write_frame(frame, file)?;

        log::info!("{} 데이터 저장 완료: {}", ticker, path.display());
        Ok(path)
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

fn format_flag(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}
