// crates/dashboard-terminal/src/lib.rs

//! Terminal front end for the options trading backend.
//!
//! - [`app`]        : view state and key handling
//! - [`ui`] / [`components`] : ratatui rendering
//! - [`network`]    : REST client and request dispatcher
//! - [`poller`]     : fixed-interval refresh loops
//! - [`config`] / [`logging`] : ambient setup for the binary

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod messages;
pub mod network;
pub mod poller;
pub mod ui;

pub use app::App;
pub use config::ClientConfig;
pub use messages::{ApiCommand, ApiEvent};
pub use network::{ApiClient, ApiError};
pub use poller::PollState;
