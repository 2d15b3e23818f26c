/**
* filename : error
* author : HAMA
* date: 2026. 10. 18.
* description: 분석 오류 타입
**/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Empty series: no bars to analyze")]
    EmptySeries,

    #[error("Mismatched column lengths: {column} has {actual} rows, expected {expected}")]
    MismatchedLengths {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Data not found: {0}")]
    DataNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Excel error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),
}
