//! JSON body decoding/encoding for the dashboard REST API.
//!
//! Each `decode_*` function takes the raw response body and returns a
//! [`Reply`]: either the accepted payload already converted to
//! `dashboard_core` types, or a rejection with the server's message.
//!
//! Bodies are decoded regardless of HTTP status: the backend answers a
//! failed login with `401` and a regular `{ success: false, message }`
//! envelope, and that message is what the user should see.

use std::fmt;

use dashboard_core::{MarketSnapshot, OptionChain, Position, TradeRecord};
use serde::de::DeserializeOwned;

use crate::wire_types::{
    ActionResponse, ExecuteTradeResponse, LoginResponse, MarketDataResponse,
    OptionChainResponse, PositionsResponse, StartTradingRequest, TradeHistoryResponse,
    UserProfile,
};

#[derive(Debug)]
pub enum ProtocolError {
    /// Body is not valid JSON or has the wrong shape.
    InvalidJson(serde_json::Error),
    /// Request payload could not be serialized.
    Encode(serde_json::Error),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidJson(e) => write!(f, "Invalid JSON response: {}", e),
            ProtocolError::Encode(e) => write!(f, "Failed to encode request: {}", e),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::InvalidJson(e) | ProtocolError::Encode(e) => Some(e),
        }
    }
}

/// Outcome carried by a well-formed response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Accepted(T),
    /// `success: false`, or `success: true` with the payload missing.
    Rejected(Option<String>),
}

impl<T> Reply<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Reply::Accepted(_))
    }

    /// Server message, or `default` when the server gave none.
    pub fn rejection_message(&self, default: &str) -> Option<String> {
        match self {
            Reply::Accepted(_) => None,
            Reply::Rejected(Some(msg)) if !msg.is_empty() => Some(msg.clone()),
            Reply::Rejected(_) => Some(default.to_string()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        match self {
            Reply::Accepted(v) => Reply::Accepted(f(v)),
            Reply::Rejected(msg) => Reply::Rejected(msg),
        }
    }
}

/// Accepted login: the server's message and the broker profile, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginAccepted {
    pub message: Option<String>,
    pub user: Option<UserProfile>,
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ProtocolError> {
    serde_json::from_slice(body).map_err(ProtocolError::InvalidJson)
}

pub fn decode_login(body: &[u8]) -> Result<Reply<LoginAccepted>, ProtocolError> {
    let resp: LoginResponse = decode(body)?;
    Ok(if resp.success {
        Reply::Accepted(LoginAccepted {
            message: resp.message,
            user: resp.user,
        })
    } else {
        Reply::Rejected(resp.message)
    })
}

/// Start / stop trading. The accepted value is the server's message.
pub fn decode_action(body: &[u8]) -> Result<Reply<Option<String>>, ProtocolError> {
    let resp: ActionResponse = decode(body)?;
    Ok(if resp.success {
        Reply::Accepted(resp.message)
    } else {
        Reply::Rejected(resp.message)
    })
}

pub fn decode_execute_trade(body: &[u8]) -> Result<Reply<Option<String>>, ProtocolError> {
    let resp: ExecuteTradeResponse = decode(body)?;
    Ok(if resp.success {
        Reply::Accepted(resp.message)
    } else {
        Reply::Rejected(resp.message)
    })
}

pub fn decode_positions(body: &[u8]) -> Result<Reply<Vec<Position>>, ProtocolError> {
    let resp: PositionsResponse = decode(body)?;
    Ok(match (resp.success, resp.positions) {
        (true, Some(positions)) => {
            Reply::Accepted(positions.into_iter().map(Position::from).collect())
        }
        _ => Reply::Rejected(resp.message),
    })
}

pub fn decode_option_chain(body: &[u8]) -> Result<Reply<OptionChain>, ProtocolError> {
    let resp: OptionChainResponse = decode(body)?;
    Ok(match (resp.success, resp.data) {
        (true, Some(data)) => Reply::Accepted(OptionChain::from(data)),
        _ => Reply::Rejected(resp.message),
    })
}

pub fn decode_trade_history(body: &[u8]) -> Result<Reply<Vec<TradeRecord>>, ProtocolError> {
    let resp: TradeHistoryResponse = decode(body)?;
    Ok(match (resp.success, resp.trades) {
        (true, Some(trades)) => Reply::Accepted(trades.into_iter().map(TradeRecord::from).collect()),
        _ => Reply::Rejected(resp.message),
    })
}

/// Market data has no envelope; an `error` field is the rejection.
///
/// A JSON `null` body is a rejection without a message.
pub fn decode_market_data(body: &[u8]) -> Result<Reply<MarketSnapshot>, ProtocolError> {
    let resp: Option<MarketDataResponse> = decode(body)?;
    Ok(match resp {
        Some(resp) => match resp.error_message() {
            Some(err) => Reply::Rejected(Some(err.to_string())),
            None => Reply::Accepted(resp.into_snapshot()),
        },
        None => Reply::Rejected(None),
    })
}

pub fn encode_start_trading(symbol: &str) -> Result<Vec<u8>, ProtocolError> {
    serde_json::to_vec(&StartTradingRequest { symbol }).map_err(ProtocolError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{SignalAction, TradeStatus};

    #[test]
    fn login_rejection_keeps_server_message() {
        let reply = decode_login(br#"{"success": false, "message": "Login failed"}"#).unwrap();
        assert_eq!(reply, Reply::Rejected(Some("Login failed".to_string())));
        assert_eq!(reply.rejection_message("x").as_deref(), Some("Login failed"));
    }

    #[test]
    fn login_accepts_profile() {
        let body = br#"{
            "success": true,
            "message": "Already logged in",
            "user": {"name": "A TRADER", "clientcode": "A123", "email": "a@example.com"}
        }"#;
        let Reply::Accepted(login) = decode_login(body).unwrap() else {
            panic!("expected accepted login");
        };
        assert_eq!(login.message.as_deref(), Some("Already logged in"));
        let user = login.user.unwrap();
        assert_eq!(user.display_name().as_deref(), Some("A TRADER (A123)"));
    }

    #[test]
    fn login_with_null_user_is_fine() {
        let reply = decode_login(br#"{"success": true, "user": null}"#).unwrap();
        assert_eq!(
            reply,
            Reply::Accepted(LoginAccepted {
                message: None,
                user: None
            })
        );
    }

    #[test]
    fn missing_message_falls_back_to_default() {
        let reply = decode_action(br#"{"success": false}"#).unwrap();
        assert_eq!(
            reply.rejection_message("Failed to start trading").as_deref(),
            Some("Failed to start trading")
        );
    }

    #[test]
    fn positions_decode_string_figures() {
        let body = br#"{"success": true, "positions": [
            {"tradingsymbol": "BANKNIFTY28MAR2447000CE", "netqty": "15",
             "averageprice": "210.35", "ltp": "198.10", "pnl": "-183.75"},
            {"tradingsymbol": "NIFTY28MAR2422000PE", "netqty": -50,
             "averageprice": null, "ltp": 88.2}
        ]}"#;
        let Reply::Accepted(positions) = decode_positions(body).unwrap() else {
            panic!("expected positions");
        };
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].net_qty, 15);
        assert_eq!(positions[0].average_price, 210.35);
        assert_eq!(positions[0].pnl, -183.75);
        assert_eq!(positions[1].net_qty, -50);
        assert_eq!(positions[1].average_price, 0.0);
        assert_eq!(positions[1].pnl, 0.0);
    }

    #[test]
    fn positions_without_payload_are_rejected() {
        let reply = decode_positions(br#"{"success": true, "positions": null}"#).unwrap();
        assert!(!reply.is_accepted());
        let reply =
            decode_positions(br#"{"success": false, "message": "Please login first"}"#).unwrap();
        assert_eq!(reply, Reply::Rejected(Some("Please login first".to_string())));
    }

    #[test]
    fn option_chain_decodes_rows_and_analytics() {
        let body = br#"{"success": true, "data": {
            "underlying_value": 47051.1,
            "pcr": 0.93, "max_pain": 47000, "heavy_call": 48000, "heavy_put": 46000,
            "options": [
                {"strike": 47000, "atm": true, "pcr": 1.04,
                 "ce": {"oi": 1250000, "volume": 98000, "ltp": 212.4, "iv": 14.25},
                 "pe": {"oi": 1300000, "volume": 87000, "ltp": 160.05, "iv": 15.1}},
                {"strike": 47100, "ce": {"oi": 900000}, "pe": null}
            ]
        }}"#;
        let Reply::Accepted(chain) = decode_option_chain(body).unwrap() else {
            panic!("expected chain");
        };
        assert_eq!(chain.underlying_value, 47051.1);
        assert_eq!(chain.max_pain, Some(47000.0));
        assert_eq!(chain.options.len(), 2);
        assert!(chain.options[0].atm);
        assert_eq!(chain.options[0].pe.ltp, 160.05);
        assert!(!chain.options[1].atm);
        assert_eq!(chain.options[1].ce.oi, 900000.0);
        assert_eq!(chain.options[1].ce.ltp, 0.0);
        assert_eq!(chain.options[1].pe.oi, 0.0);
    }

    #[test]
    fn option_chain_with_null_options_is_empty() {
        let body = br#"{"success": true, "data": {"underlying_value": 1, "options": null}}"#;
        let Reply::Accepted(chain) = decode_option_chain(body).unwrap() else {
            panic!("expected chain");
        };
        assert!(chain.is_empty());
    }

    #[test]
    fn trade_history_maps_status_and_exit() {
        let body = br#"{"success": true, "trades": [
            {"timestamp": "2024-03-01T10:15:00.123456", "symbol": "BANKNIFTY47000CALL",
             "strike": 47000, "option_type": "CALL", "side": "BUY",
             "entry_price": 210, "exit_price": null, "quantity": 15,
             "pnl": null, "pnl_percentage": null, "status": "OPEN"},
            {"timestamp": "2024-03-01T11:00:00", "symbol": "BANKNIFTY46900PUT",
             "strike": 46900.0, "option_type": "PUT", "side": "BUY",
             "entry_price": "150.5", "exit_price": 0, "quantity": 30,
             "pnl": "-412.5", "pnl_percentage": -9.1, "status": "CLOSED"}
        ]}"#;
        let Reply::Accepted(trades) = decode_trade_history(body).unwrap() else {
            panic!("expected trades");
        };
        assert_eq!(trades[0].status, TradeStatus::Open);
        assert_eq!(trades[0].exit_price, None);
        assert_eq!(trades[0].pnl, None);
        assert_eq!(trades[1].status, TradeStatus::Closed);
        assert_eq!(trades[1].entry_price, 150.5);
        assert_eq!(trades[1].exit_price, None);
        assert_eq!(trades[1].pnl, Some(-412.5));
        assert_eq!(trades[1].quantity, 30);
    }

    #[test]
    fn market_data_error_is_a_rejection() {
        let body = br#"{"error": "No data available", "signal": {"action": "WAIT"}}"#;
        assert_eq!(
            decode_market_data(body).unwrap(),
            Reply::Rejected(Some("No data available".to_string()))
        );
        assert_eq!(decode_market_data(b"null").unwrap(), Reply::Rejected(None));
    }

    #[test]
    fn market_data_decodes_signal() {
        let body = br#"{"pcr": 0.61, "max_pain": 47200, "heavy_call": 48000,
            "heavy_put": 46500, "current_price": 47050.4,
            "signal": {"action": "BUY", "type": "CALL", "entry": 47050.4,
                       "target": 47300, "sl": 47000.4, "confidence": 85}}"#;
        let Reply::Accepted(snapshot) = decode_market_data(body).unwrap() else {
            panic!("expected snapshot");
        };
        assert_eq!(snapshot.current_price, Some(47050.4));
        let signal = snapshot.signal.unwrap();
        assert_eq!(signal.action, SignalAction::Buy);
        assert_eq!(signal.option_type.as_deref(), Some("CALL"));
        assert_eq!(signal.stop_loss, Some(47000.4));
        assert_eq!(signal.confidence, Some(85.0));
    }

    #[test]
    fn html_error_page_is_invalid_json() {
        let err = decode_positions(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON response"));
    }

    #[test]
    fn start_trading_body_carries_symbol() {
        let body = encode_start_trading("NIFTY").unwrap();
        assert_eq!(body, br#"{"symbol":"NIFTY"}"#);
    }

    #[test]
    fn execute_trade_ignores_the_broker_order_reply() {
        let reply = decode_execute_trade(
            br#"{"success": true, "message": "Order placed", "order": {"orderid": "240301000004", "status": true}}"#,
        )
        .unwrap();
        assert_eq!(reply, Reply::Accepted(Some("Order placed".to_string())));

        let reply = decode_execute_trade(br#"{"success": false}"#).unwrap();
        assert_eq!(
            reply.rejection_message("Trade execution failed").as_deref(),
            Some("Trade execution failed")
        );
    }
}
