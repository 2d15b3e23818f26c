//! 주가 기술적 지표 분석 라이브러리
//!
//! 일봉(OHLCV) 시계열에서 이동평균, 오실레이터, 변동성 밴드, VWAP,
//! 추세 강도와 매수/매도 신호를 계산합니다.

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod indicators;
pub mod models;
pub mod utils;

// 핵심 타입 재노출
pub use crate::error::AnalysisError;
pub use crate::indicators::{compute_indicators, compute_indicators_with, IndicatorParams};
pub use crate::models::bar::Bar;
pub use crate::models::frame::IndicatorFrame;
pub use crate::models::series::Series;

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 결과 타입 별칭
pub type Result<T> = std::result::Result<T, AnalysisError>;
