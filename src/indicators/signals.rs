/**
* filename : signals
* author : HAMA
* date: 2026. 10. 18.
* description: RSI + MACD 매수/매도 신호
**/

use super::{greater_than, less_than, IndicatorParams, MomentumColumns};

/// 매수: RSI 과매도 AND MACD > 시그널
pub fn is_buy(rsi: f64, macd: f64, signal_line: f64, params: &IndicatorParams) -> bool {
  less_than(rsi, params.rsi_oversold) && greater_than(macd, signal_line)
}

/// 매도: RSI 과매수 AND MACD < 시그널
pub fn is_sell(rsi: f64, macd: f64, signal_line: f64, params: &IndicatorParams) -> bool {
  greater_than(rsi, params.rsi_overbought) && less_than(macd, signal_line)
}

/// 신호 모듈 출력 열 (행마다 독립, 상태 없음)
#[derive(Debug, Clone, PartialEq)]
pub struct SignalColumns {
  pub buy: Vec<bool>,
  pub sell: Vec<bool>,
}

impl SignalColumns {
  pub fn compute(momentum: &MomentumColumns, params: &IndicatorParams) -> Self {
    let rows = momentum
      .rsi
      .iter()
      .zip(momentum.macd.iter())
      .zip(momentum.signal_line.iter());

    let (buy, sell) = rows
      .map(|((rsi, macd), signal)| {
        (
          is_buy(*rsi, *macd, *signal, params),
          is_sell(*rsi, *macd, *signal, params),
        )
      })
      .unzip();

    SignalColumns { buy, sell }
  }

  pub fn buy_count(&self) -> usize {
    self.buy.iter().filter(|b| **b).count()
  }

  pub fn sell_count(&self) -> usize {
    self.sell.iter().filter(|s| **s).count()
  }
}
