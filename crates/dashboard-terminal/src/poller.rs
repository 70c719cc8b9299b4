// crates/dashboard-terminal/src/poller.rs

//! The two fixed-interval refresh loops.
//!
//! Both timers run unconditionally from startup; each tick reads the
//! latest session flags and symbol published by the app and turns them
//! into commands. There is no backoff and no in-flight tracking.

use std::time::Duration;

use dashboard_core::Session;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::messages::ApiCommand;

/// What the pollers need to know about the app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    pub session: Session,
    pub symbol: String,
}

/// Commands for one fast tick.
pub fn fast_commands(state: &PollState) -> Vec<ApiCommand> {
    let tick = state.session.fast_tick();
    let mut cmds = Vec::new();
    if tick.positions {
        cmds.push(ApiCommand::RefreshPositions);
    }
    if tick.option_chain {
        cmds.push(ApiCommand::RefreshOptionChain {
            symbol: state.symbol.clone(),
        });
    }
    if tick.market_data {
        cmds.push(ApiCommand::RefreshMarketData);
    }
    cmds
}

/// Commands for one slow tick.
pub fn slow_commands(state: &PollState) -> Vec<ApiCommand> {
    if state.session.slow_tick() {
        vec![ApiCommand::RefreshTradeHistory]
    } else {
        Vec::new()
    }
}

/// Run both loops until the command channel closes.
pub async fn run_pollers(
    state: watch::Receiver<PollState>,
    tx: UnboundedSender<ApiCommand>,
    fast: Duration,
    slow: Duration,
) {
    tokio::join!(
        run_timer("fast", fast, state.clone(), tx.clone(), fast_commands),
        run_timer("slow", slow, state, tx, slow_commands),
    );
    debug!("Pollers shutting down (command channel closed)");
}

async fn run_timer(
    name: &'static str,
    period: Duration,
    state: watch::Receiver<PollState>,
    tx: UnboundedSender<ApiCommand>,
    commands: fn(&PollState) -> Vec<ApiCommand>,
) {
    // First tick one full period after start.
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        timer.tick().await;
        let snapshot = state.borrow().clone();
        let cmds = commands(&snapshot);
        if !cmds.is_empty() {
            debug!(timer = name, count = cmds.len(), "poll tick");
        }
        for cmd in cmds {
            if tx.send(cmd).is_err() {
                return;
            }
        }
    }
}
