// crates/dashboard-terminal/src/app.rs

use std::collections::VecDeque;
use std::fmt::Display;

use chrono::Local;
use crossterm::event::KeyCode;
use dashboard_core::{
    MarketOverview, Notification, OptionChain, PerformanceMetrics, Position, Session, Signal,
    TradeRecord,
};
use dashboard_protocol::Reply;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::messages::{ApiCommand, ApiEvent, ApiResult};
use crate::poller::PollState;

pub const LOGIN_LABEL: &str = "Login to Angel One";
pub const LOGGING_IN_LABEL: &str = "Logging in...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginControl {
    pub enabled: bool,
    pub label: &'static str,
}

impl Default for LoginControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: LOGIN_LABEL,
        }
    }
}

pub struct App {
    // Connection state
    pub connected: bool,
    pub session: Session,
    pub user: Option<String>,

    // Controls
    pub login_control: LoginControl,
    pub start_enabled: bool,
    pub stop_enabled: bool,

    // UI state
    pub should_quit: bool,
    pub show_help: bool,
    pub notifications: VecDeque<Notification>,

    // Symbol selector
    pub symbols: Vec<String>,
    pub symbol_index: usize,

    // Rendered data, replaced wholesale on every successful fetch
    pub positions: Vec<Position>,
    pub option_chain: Option<OptionChain>,
    pub chain_symbol: Option<String>,
    pub trades: Vec<TradeRecord>,
    pub metrics: PerformanceMetrics,
    pub overview: MarketOverview,
    pub signal: Option<Signal>,

    // Statistics
    pub message_count: u64,

    command_tx: Option<UnboundedSender<ApiCommand>>,
    state_tx: Option<watch::Sender<PollState>>,
}

impl App {
    pub fn new(symbols: Vec<String>, symbol_index: usize) -> Self {
        let symbol_index = symbol_index.min(symbols.len().saturating_sub(1));
        Self {
            connected: false,
            session: Session::default(),
            user: None,
            login_control: LoginControl::default(),
            start_enabled: true,
            stop_enabled: false,
            should_quit: false,
            show_help: false,
            notifications: VecDeque::new(),
            symbols,
            symbol_index,
            positions: Vec::new(),
            option_chain: None,
            chain_symbol: None,
            trades: Vec::new(),
            metrics: PerformanceMetrics::default(),
            overview: MarketOverview::default(),
            signal: None,
            message_count: 0,
            command_tx: None,
            state_tx: None,
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn set_command_sender(&mut self, tx: UnboundedSender<ApiCommand>) {
        self.command_tx = Some(tx);
    }

    /// Attach the pollers' view of the app and publish the current state.
    pub fn set_state_publisher(&mut self, tx: watch::Sender<PollState>) {
        self.state_tx = Some(tx);
        self.publish_state();
    }

    pub fn poll_state(&self) -> PollState {
        PollState {
            session: self.session,
            symbol: self.selected_symbol().to_string(),
        }
    }

    fn publish_state(&self) {
        if let Some(tx) = &self.state_tx {
            tx.send_replace(self.poll_state());
        }
    }

    fn send(&self, cmd: ApiCommand) {
        match &self.command_tx {
            Some(tx) => {
                if tx.send(cmd).is_err() {
                    warn!("Dispatcher is gone; command dropped");
                }
            }
            None => debug!(?cmd, "No dispatcher attached"),
        }
    }

    fn notify(&mut self, notification: Notification) {
        info!(kind = ?notification.kind, text = %notification.message, "notification");
        self.notifications.push_back(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }

    pub fn selected_symbol(&self) -> &str {
        self.symbols
            .get(self.symbol_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    // ------------------------------------------------------------------
    // Key bindings
    // ------------------------------------------------------------------

    /// An open notification swallows every key except Enter / Esc.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.current_notification().is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_notification();
            }
            return;
        }

        if self.show_help {
            if matches!(code, KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::F(1) | KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Char('l') | KeyCode::Char('L') => self.handle_login(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.start_trading(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.stop_trading(),
            KeyCode::Char('e') | KeyCode::Char('E') => self.execute_trade(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.refresh_all(),
            KeyCode::Right | KeyCode::Char(']') => self.next_symbol(),
            KeyCode::Left | KeyCode::Char('[') => self.prev_symbol(),
            _ => {}
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    pub fn handle_login(&mut self) {
        if self.session.logged_in || !self.login_control.enabled {
            return;
        }
        self.login_control = LoginControl {
            enabled: false,
            label: LOGGING_IN_LABEL,
        };
        self.send(ApiCommand::Login);
    }

    pub fn start_trading(&mut self) {
        if !self.session.logged_in || !self.start_enabled {
            return;
        }
        let symbol = self.selected_symbol().to_string();
        self.send(ApiCommand::StartTrading { symbol });
    }

    pub fn stop_trading(&mut self) {
        if !self.session.logged_in || !self.stop_enabled {
            return;
        }
        self.send(ApiCommand::StopTrading);
    }

    pub fn execute_trade(&mut self) {
        if !self.session.logged_in {
            return;
        }
        self.send(ApiCommand::ExecuteTrade);
    }

    pub fn next_symbol(&mut self) {
        if self.symbols.is_empty() {
            return;
        }
        self.symbol_index = (self.symbol_index + 1) % self.symbols.len();
        self.handle_symbol_change();
    }

    pub fn prev_symbol(&mut self) {
        if self.symbols.is_empty() {
            return;
        }
        self.symbol_index = (self.symbol_index + self.symbols.len() - 1) % self.symbols.len();
        self.handle_symbol_change();
    }

    fn handle_symbol_change(&mut self) {
        self.publish_state();
        if self.session.logged_in {
            self.send(ApiCommand::RefreshOptionChain {
                symbol: self.selected_symbol().to_string(),
            });
        }
    }

    /// Manual refresh of everything the session allows.
    pub fn refresh_all(&mut self) {
        if !self.session.logged_in {
            return;
        }
        self.load_initial_data();
        if self.session.trading_active {
            self.send(ApiCommand::RefreshMarketData);
        }
    }

    fn load_initial_data(&self) {
        self.send(ApiCommand::RefreshPositions);
        self.send(ApiCommand::RefreshTradeHistory);
        self.send(ApiCommand::RefreshOptionChain {
            symbol: self.selected_symbol().to_string(),
        });
    }

    // ------------------------------------------------------------------
    // Responses
    // ------------------------------------------------------------------

    pub fn handle_api_event(&mut self, event: ApiEvent) {
        self.message_count += 1;

        match event {
            ApiEvent::Login(result) => self.on_login(result),
            ApiEvent::StartTrading { symbol, result } => self.on_start_trading(&symbol, result),
            ApiEvent::StopTrading(result) => self.on_stop_trading(result),
            ApiEvent::ExecuteTrade(result) => self.on_execute_trade(result),
            ApiEvent::Positions(result) => {
                if let Some(positions) = accepted("positions", result) {
                    self.positions = positions;
                }
            }
            ApiEvent::OptionChain { symbol, result } => {
                if let Some(chain) = accepted("option chain", result) {
                    self.overview.apply_chain(&chain, Local::now());
                    self.option_chain = Some(chain);
                    self.chain_symbol = Some(symbol);
                }
            }
            ApiEvent::TradeHistory(result) => {
                if let Some(trades) = accepted("trade history", result) {
                    if let Some(metrics) = PerformanceMetrics::from_trades(&trades) {
                        self.metrics = metrics;
                    }
                    self.trades = trades;
                }
            }
            ApiEvent::MarketData(result) => {
                if let Some(snapshot) = accepted("market data", result) {
                    self.overview.apply_snapshot(&snapshot, Local::now());
                    if let Some(signal) = &snapshot.signal {
                        info!(action = %signal.action, confidence = ?signal.confidence, "Signal");
                    }
                    self.signal = snapshot.signal;
                }
            }
        }
    }

    fn on_login(&mut self, result: ApiResult<dashboard_protocol::LoginAccepted>) {
        match result {
            Ok(Reply::Accepted(login)) => {
                self.session.logged_in = true;
                self.user = login.user.and_then(|u| u.display_name());
                self.publish_state();
                self.notify(Notification::success("Login successful!"));
                self.load_initial_data();
            }
            Ok(rejected) => {
                let msg = rejected.rejection_message("Login failed").unwrap_or_default();
                self.notify(Notification::error(msg));
                self.login_control = LoginControl::default();
            }
            Err(e) => {
                error!("Login error: {}", e);
                self.notify(Notification::error(format!("Login failed: {}", e)));
                self.login_control = LoginControl::default();
            }
        }
    }

    fn on_start_trading(&mut self, symbol: &str, result: ApiResult<Option<String>>) {
        match result {
            Ok(Reply::Accepted(_)) => {
                self.session.trading_active = true;
                self.start_enabled = false;
                self.stop_enabled = true;
                self.publish_state();
                self.notify(Notification::success(format!("Trading started for {}", symbol)));
            }
            Ok(rejected) => self.notify_rejection(&rejected, "Failed to start trading"),
            Err(e) => self.notify_failure("Start trading error", "Failed to start trading", e),
        }
    }

    fn on_stop_trading(&mut self, result: ApiResult<Option<String>>) {
        match result {
            Ok(Reply::Accepted(_)) => {
                self.session.trading_active = false;
                self.start_enabled = true;
                self.stop_enabled = false;
                self.publish_state();
                self.notify(Notification::info("Trading stopped"));
            }
            Ok(rejected) => self.notify_rejection(&rejected, "Failed to stop trading"),
            Err(e) => self.notify_failure("Stop trading error", "Failed to stop trading", e),
        }
    }

    fn on_execute_trade(&mut self, result: ApiResult<Option<String>>) {
        match result {
            Ok(Reply::Accepted(message)) => {
                let message = message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Trade executed".to_string());
                self.notify(Notification::success(message));
            }
            Ok(rejected) => self.notify_rejection(&rejected, "Trade execution failed"),
            Err(e) => self.notify_failure("Execute trade error", "Trade execution failed", e),
        }
    }

    fn notify_rejection<T>(&mut self, reply: &Reply<T>, default: &str) {
        if let Some(msg) = reply.rejection_message(default) {
            self.notify(Notification::error(msg));
        }
    }

    fn notify_failure(&mut self, context: &str, prefix: &str, err: impl Display) {
        error!("{}: {}", context, err);
        self.notify(Notification::error(format!("{}: {}", prefix, err)));
    }
}

/// Payload of a successful poll; failures are logged and dropped.
fn accepted<T>(what: &str, result: ApiResult<T>) -> Option<T> {
    match result {
        Ok(Reply::Accepted(value)) => Some(value),
        Ok(Reply::Rejected(msg)) => {
            debug!(what, reason = ?msg, "Update rejected by server");
            None
        }
        Err(e) => {
            error!("Error updating {}: {}", what, e);
            None
        }
    }
}
