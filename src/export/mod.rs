pub mod csv_exporter;
pub mod xlsx_exporter;

pub use csv_exporter::CsvExporter;
pub use xlsx_exporter::XlsxExporter;

use std::path::{Path, PathBuf};

use crate::error::AnalysisError;
use crate::models::frame::IndicatorFrame;

/// 지표 프레임을 표 형식 파일로 저장
pub trait FrameExporter {
    /// 저장한 파일 경로를 돌려준다
    fn export(&self, frame: &IndicatorFrame, ticker: &str) -> Result<PathBuf, AnalysisError>;
}

/// 확장자(.csv / .xlsx)로 내보내기 형식 선택
pub fn exporter_for_path(path: impl Into<PathBuf>) -> Result<Box<dyn FrameExporter>, AnalysisError> {
    let path = path.into();

    match extension(&path).as_deref() {
        Some("csv") => Ok(Box::new(CsvExporter::to_file(path))),
        Some("xlsx") => Ok(Box::new(XlsxExporter::to_file(path))),
        _ => Err(unsupported(&path)),
    }
}

/// 전체 열 이름 (가격 열 + 지표 열 + 신호 열)
pub(crate) fn header(frame: &IndicatorFrame) -> Vec<&'static str> {
    let mut header = vec!["Date", "Open", "High", "Low", "Close", "Volume"];
    header.extend(frame.numeric_columns().iter().map(|(name, _)| *name));
    header.extend(frame.flag_columns().iter().map(|(name, _)| *name));
    header
}

/// 지정 파일의 확장자가 형식과 다르면 오류
pub(crate) fn check_extension(path: &Path, expected: &str) -> Result<(), AnalysisError> {
    if extension(path).as_deref() == Some(expected) {
        Ok(())
    } else {
        Err(unsupported(path))
    }
}

/// 상위 디렉터리가 없으면 만든다
pub(crate) fn ensure_parent(path: &Path) -> Result<(), AnalysisError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn unsupported(path: &Path) -> AnalysisError {
    AnalysisError::InvalidParameter(format!(
        "unsupported output file {} (expected .csv or .xlsx)",
        path.display()
    ))
}
