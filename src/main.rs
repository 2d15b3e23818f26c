/**
* filename : main
* author : HAMA
* date: 2026. 10. 18.
* description: 주가 지표 분석 CLI
**/

use std::path::PathBuf;

use xAnalyzer::analysis::{run_analysis, AnalysisRequest};
use xAnalyzer::config::Config;
use xAnalyzer::data::{CsvDataProvider, HistoricalDataProvider, MockDataProvider};
use xAnalyzer::export::{exporter_for_path, CsvExporter, FrameExporter};
use xAnalyzer::utils::{logging, parse_date};
use xAnalyzer::AnalysisError;

const USAGE: &str = "사용법: xAnalyzer <TICKER> <START YYYY-MM-DD> <END YYYY-MM-DD> [--data FILE] [--out FILE.csv|FILE.xlsx] [--mock]";

struct CliArgs {
    ticker: String,
    start: String,
    end: String,
    data_file: Option<PathBuf>,
    out_file: Option<PathBuf>,
    mock: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, AnalysisError> {
    let mut positional = Vec::new();
    let mut data_file = None;
    let mut out_file = None;
    let mut mock = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--data" => {
                let value = iter.next().ok_or_else(|| AnalysisError::InvalidParameter("--data requires a file".to_string()))?;
                data_file = Some(PathBuf::from(value));
            }
            "--out" => {
                let value = iter.next().ok_or_else(|| AnalysisError::InvalidParameter("--out requires a file".to_string()))?;
                out_file = Some(PathBuf::from(value));
            }
            "--mock" => mock = true,
            other if other.starts_with("--") => {
                return Err(AnalysisError::InvalidParameter(format!("unknown option {}", other)));
            }
            other => positional.push(other.trim().to_string()),
        }
    }

    if positional.len() != 3 || positional.iter().any(|v| v.is_empty()) {
        log::warn!("모든 항목을 입력해 주세요");
        return Err(AnalysisError::InvalidParameter(USAGE.to_string()));
    }

    Ok(CliArgs {
        ticker: positional[0].clone(),
        start: positional[1].clone(),
        end: positional[2].clone(),
        data_file,
        out_file,
        mock,
    })
}

fn main() -> Result<(), anyhow::Error> {
    // 설정 로드
    let config = Config::load()?;

    // 로깅 초기화
    logging::init(&config.logging.level, config.logging.file_path.as_deref())?;
    log::info!("주가 분석 시작 (v{})", xAnalyzer::VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", USAGE);
            return Err(e.into());
        }
    };

    let request = AnalysisRequest::new(&cli.ticker, parse_date(&cli.start)?, parse_date(&cli.end)?)?;

    let provider: Box<dyn HistoricalDataProvider> = if cli.mock || config.data.use_mock {
        Box::new(MockDataProvider::new(42))
    } else {
        let path = cli
            .data_file
            .or_else(|| config.data.csv_path.clone())
            .ok_or_else(|| AnalysisError::ConfigError("no data file given (--data or data.csv_path)".to_string()))?;
        Box::new(CsvDataProvider::new(path, ',')?)
    };

    let exporter: Box<dyn FrameExporter> = match cli.out_file {
        Some(path) => exporter_for_path(path)?,
        None => Box::new(CsvExporter::to_directory(config.data.output_dir.clone())),
    };

    match run_analysis(provider.as_ref(), Some(exporter.as_ref()), &request, &config.indicators) {
        Ok((_, summary)) => {
            println!("\n{}", summary.summary());
            if let Some(path) = &summary.output_path {
                println!("저장 위치: {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            logging::log_error(&request.ticker, &e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let cli = parse_args(&args(&["aapl", "2024-01-01", "2024-06-30", "--out", "a.csv", "--mock"])).unwrap();

        assert_eq!(cli.ticker, "aapl");
        assert_eq!(cli.end, "2024-06-30");
        assert_eq!(cli.out_file, Some(PathBuf::from("a.csv")));
        assert!(cli.data_file.is_none());
        assert!(cli.mock);
    }

    #[test]
    fn test_missing_fields() {
        assert!(parse_args(&args(&["AAPL", "2024-01-01"])).is_err());
        assert!(parse_args(&args(&["AAPL", "2024-01-01", "2024-02-01", "--data"])).is_err());
    }

    #[test]
    fn test_unknown_option() {
        for option in ["--help", "--dat"] {
            let result = parse_args(&args(&["AAPL", "2024-01-01", "2024-02-01", option, "a.csv"]));
            assert!(matches!(result, Err(AnalysisError::InvalidParameter(msg)) if msg.contains(option)));
        }
    }
}
