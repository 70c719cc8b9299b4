//! dashboard-protocol
//!
//! Wire-level encoding/decoding for the trading backend's REST API.
//!
//! This crate is responsible for turning JSON response bodies into
//! `dashboard_core` view models and request payloads into JSON.
//!
//! - [`endpoints`]  : request paths
//! - [`wire_types`] : serde mirrors of the JSON envelopes
//! - [`lenient`]    : number decoding that tolerates numeric strings
//! - [`json_codec`] : body decode/encode and [`ProtocolError`]

pub mod endpoints;
pub mod lenient;
pub mod wire_types;
pub mod json_codec;

pub use json_codec::{
    LoginAccepted,
    ProtocolError,
    Reply,
    decode_action,
    decode_execute_trade,
    decode_login,
    decode_market_data,
    decode_option_chain,
    decode_positions,
    decode_trade_history,
    encode_start_trading,
};
