// crates/dashboard-terminal/src/messages.rs

//! Messages between the UI loop and the network side.
//!
//! - `ApiCommand`: app / pollers → dispatcher
//! - `ApiEvent`:   dispatcher → app

use dashboard_core::{MarketSnapshot, OptionChain, Position, TradeRecord};
use dashboard_protocol::{LoginAccepted, Reply};

use crate::network::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    Login,
    StartTrading { symbol: String },
    StopTrading,
    ExecuteTrade,
    RefreshPositions,
    RefreshOptionChain { symbol: String },
    RefreshTradeHistory,
    RefreshMarketData,
}

pub type ApiResult<T> = Result<Reply<T>, ApiError>;

/// One completed request.
#[derive(Debug)]
pub enum ApiEvent {
    Login(ApiResult<LoginAccepted>),
    StartTrading {
        symbol: String,
        result: ApiResult<Option<String>>,
    },
    StopTrading(ApiResult<Option<String>>),
    ExecuteTrade(ApiResult<Option<String>>),
    Positions(ApiResult<Vec<Position>>),
    OptionChain {
        symbol: String,
        result: ApiResult<OptionChain>,
    },
    TradeHistory(ApiResult<Vec<TradeRecord>>),
    MarketData(ApiResult<MarketSnapshot>),
}
