use chrono::NaiveDate;

use crate::error::AnalysisError;
use super::bar::Bar;

/// 날짜 오름차순 일봉 시계열 (열 단위 저장)
///
/// `from_bars`로 만들면 모든 열의 길이가 같다. `from_columns`는 길이를
/// 검사하지 않으며, 길이 검사는 지표 계산 직전에 `validate`에서 한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    dates: Vec<NaiveDate>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
}

impl Series {
    pub fn from_bars(bars: &[Bar]) -> Self {
        let mut series = Series {
            dates: Vec::with_capacity(bars.len()),
            open: Vec::with_capacity(bars.len()),
            high: Vec::with_capacity(bars.len()),
            low: Vec::with_capacity(bars.len()),
            close: Vec::with_capacity(bars.len()),
            volume: Vec::with_capacity(bars.len()),
        };

        for bar in bars {
            series.push(bar);
        }

        series
    }

    pub fn from_columns(
        dates: Vec<NaiveDate>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Self {
        Series {
            dates,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn push(&mut self, bar: &Bar) {
        self.dates.push(bar.date);
        self.open.push(bar.open);
        self.high.push(bar.high);
        self.low.push(bar.low);
        self.close.push(bar.close);
        self.volume.push(bar.volume);
    }

    /// 행 수 (날짜 열 기준)
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// 모든 열이 비어 있거나 열 길이가 다르면 오류
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let expected = self.len();
        let columns: [(&'static str, usize); 5] = [
            ("open", self.open.len()),
            ("high", self.high.len()),
            ("low", self.low.len()),
            ("close", self.close.len()),
            ("volume", self.volume.len()),
        ];

        if expected == 0 && columns.iter().all(|(_, actual)| *actual == 0) {
            return Err(AnalysisError::EmptySeries);
        }

        // 날짜 열이 기준
        for (column, actual) in columns {
            if actual != expected {
                return Err(AnalysisError::MismatchedLengths {
                    column,
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn open(&self) -> &[f64] {
        &self.open
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn close(&self) -> &[f64] {
        &self.close
    }

    pub fn volume(&self) -> &[f64] {
        &self.volume
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn bar(&self, index: usize) -> Option<Bar> {
        Some(Bar {
            date: *self.dates.get(index)?,
            open: *self.open.get(index)?,
            high: *self.high.get(index)?,
            low: *self.low.get(index)?,
            close: *self.close.get(index)?,
            volume: *self.volume.get(index)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_from_bars_keeps_order() {
        let bars = vec![Bar::flat(day(2), 10.0, 5.0), Bar::flat(day(3), 11.0, 6.0)];
        let series = Series::from_bars(&bars);

        assert_eq!(series.len(), 2);
        assert_eq!(series.close(), &[10.0, 11.0]);
        assert_eq!(series.first_date(), Some(day(2)));
        assert_eq!(series.bar(1), Some(bars[1].clone()));
        assert!(series.validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let series = Series::default();
        assert!(matches!(series.validate(), Err(AnalysisError::EmptySeries)));
    }

    #[test]
    fn test_validate_mismatched_columns() {
        let series = Series::from_columns(
            vec![day(2), day(3)],
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![1.0],
            vec![1.0, 2.0],
        );

        match series.validate() {
            Err(AnalysisError::MismatchedLengths { column, expected, actual }) => {
                assert_eq!(column, "close");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(series.bar(1), None);
    }

    #[test]
    fn test_validate_missing_dates() {
        let series = Series::from_columns(
            vec![],
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
        );

        assert!(matches!(
            series.validate(),
            Err(AnalysisError::MismatchedLengths { column: "open", expected: 0, actual: 3 })
        ));
    }
}
