pub mod csv_provider;
pub mod mock_provider;

pub use csv_provider::CsvDataProvider;
pub use mock_provider::MockDataProvider;

use chrono::NaiveDate;

use crate::error::AnalysisError;
use crate::models::bar::Bar;

/// 심볼과 기간(양 끝 포함)으로 일봉을 제공하는 데이터 소스
///
/// 결과는 날짜 오름차순이며 비어 있을 수 있다. 빈 결과를 지표 엔진에
/// 넘기지 않는 것은 호출자의 몫이다.
pub trait HistoricalDataProvider {
    fn available_symbols(&self) -> Vec<String>;

    fn load_data(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, AnalysisError>;
}
