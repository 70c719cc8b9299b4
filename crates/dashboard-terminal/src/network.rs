// crates/dashboard-terminal/src/network.rs

use std::time::Duration;

use dashboard_core::{MarketSnapshot, OptionChain, Position, TradeRecord};
use dashboard_protocol::{
    self as protocol, endpoints, LoginAccepted, ProtocolError, Reply,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::messages::{ApiCommand, ApiEvent};

/// Sent on POSTs that carry no payload; JSON-reading handlers reject an
/// empty body.
const EMPTY_OBJECT: &[u8] = b"{}";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("HTTP {status}: {source}")]
    UnexpectedBody {
        status: u16,
        #[source]
        source: ProtocolError,
    },
    #[error("{0}")]
    Encode(ProtocolError),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e)
        } else {
            ApiError::Transport(e)
        }
    }
}

impl ApiError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout(_))
    }
}

/// REST client for the trading backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get(&self, path: &str) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        debug!(path, %status, bytes = body.len(), "GET");
        Ok((status, body.to_vec()))
    }

    async fn post(&self, path: &str, body: Option<Vec<u8>>) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let body = body.unwrap_or_else(|| EMPTY_OBJECT.to_vec());
        let resp = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        debug!(path, %status, bytes = body.len(), "POST");
        Ok((status, body.to_vec()))
    }

    pub async fn login(&self) -> Result<Reply<LoginAccepted>, ApiError> {
        let (status, body) = self.post(endpoints::LOGIN, None).await?;
        decoded(status, protocol::decode_login(&body))
    }

    pub async fn start_trading(&self, symbol: &str) -> Result<Reply<Option<String>>, ApiError> {
        let payload = protocol::encode_start_trading(symbol).map_err(ApiError::Encode)?;
        let (status, body) = self.post(endpoints::START_TRADING, Some(payload)).await?;
        decoded(status, protocol::decode_action(&body))
    }

    pub async fn stop_trading(&self) -> Result<Reply<Option<String>>, ApiError> {
        let (status, body) = self.post(endpoints::STOP_TRADING, None).await?;
        decoded(status, protocol::decode_action(&body))
    }

    pub async fn execute_trade(&self) -> Result<Reply<Option<String>>, ApiError> {
        let (status, body) = self.post(endpoints::EXECUTE_TRADE, None).await?;
        decoded(status, protocol::decode_execute_trade(&body))
    }

    pub async fn positions(&self) -> Result<Reply<Vec<Position>>, ApiError> {
        let (status, body) = self.get(endpoints::POSITIONS).await?;
        decoded(status, protocol::decode_positions(&body))
    }

    pub async fn option_chain(&self, symbol: &str) -> Result<Reply<OptionChain>, ApiError> {
        let (status, body) = self.get(&endpoints::option_chain(symbol)).await?;
        decoded(status, protocol::decode_option_chain(&body))
    }

    pub async fn trade_history(&self) -> Result<Reply<Vec<TradeRecord>>, ApiError> {
        let (status, body) = self.get(endpoints::TRADE_HISTORY).await?;
        decoded(status, protocol::decode_trade_history(&body))
    }

    pub async fn market_data(&self) -> Result<Reply<MarketSnapshot>, ApiError> {
        let (status, body) = self.get(endpoints::MARKET_DATA).await?;
        decoded(status, protocol::decode_market_data(&body))
    }

    /// Run one command to completion and wrap the outcome for the app.
    pub async fn execute(&self, cmd: ApiCommand) -> ApiEvent {
        match cmd {
            ApiCommand::Login => ApiEvent::Login(self.login().await),
            ApiCommand::StartTrading { symbol } => {
                let result = self.start_trading(&symbol).await;
                ApiEvent::StartTrading { symbol, result }
            }
            ApiCommand::StopTrading => ApiEvent::StopTrading(self.stop_trading().await),
            ApiCommand::ExecuteTrade => ApiEvent::ExecuteTrade(self.execute_trade().await),
            ApiCommand::RefreshPositions => ApiEvent::Positions(self.positions().await),
            ApiCommand::RefreshOptionChain { symbol } => {
                let result = self.option_chain(&symbol).await;
                ApiEvent::OptionChain { symbol, result }
            }
            ApiCommand::RefreshTradeHistory => ApiEvent::TradeHistory(self.trade_history().await),
            ApiCommand::RefreshMarketData => ApiEvent::MarketData(self.market_data().await),
        }
    }
}

fn decoded<T>(status: StatusCode, result: Result<T, ProtocolError>) -> Result<T, ApiError> {
    result.map_err(|source| ApiError::UnexpectedBody {
        status: status.as_u16(),
        source,
    })
}

/// Forward commands to the backend until the command channel closes.
///
/// Every command runs in its own task: nothing waits for an earlier
/// request to the same endpoint, so responses may arrive out of order.
pub async fn run_dispatcher(
    client: ApiClient,
    mut rx: UnboundedReceiver<ApiCommand>,
    tx: UnboundedSender<ApiEvent>,
) {
    while let Some(cmd) = rx.recv().await {
        debug!(?cmd, "dispatching");
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let event = client.execute(cmd).await;
            if tx.send(event).is_err() {
                warn!("App receiver dropped; discarding response");
            }
        });
    }

    debug!("Dispatcher shutting down (command channel closed)");
}
