//! REST paths served by the trading backend.

pub const LOGIN: &str = "/api/login";
pub const START_TRADING: &str = "/api/start-trading";
pub const STOP_TRADING: &str = "/api/stop-trading";
pub const EXECUTE_TRADE: &str = "/api/execute-trade";
pub const POSITIONS: &str = "/api/positions";
pub const TRADE_HISTORY: &str = "/api/trade-history";
pub const MARKET_DATA: &str = "/api/market-data";

const OPTION_CHAIN_PREFIX: &str = "/api/option-chain/";

/// `/api/option-chain/:symbol`
pub fn option_chain(symbol: &str) -> String {
    format!("{}{}", OPTION_CHAIN_PREFIX, symbol)
}
