//! Session flags shared by the controller and the polling loops.

/// The two process-wide flags of the dashboard.
///
/// Both only ever change in response to a successful server reply;
/// the pollers read them on every tick to decide what to request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub trading_active: bool,
}

/// What a single fast (5s) tick should fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastTick {
    pub positions: bool,
    pub option_chain: bool,
    pub market_data: bool,
}

impl FastTick {
    pub fn is_idle(&self) -> bool {
        !self.positions && !self.option_chain && !self.market_data
    }
}

impl Session {
    /// Gate for the fast tick: positions once logged in, the option
    /// chain and market data only while trading is active too.
    pub fn fast_tick(&self) -> FastTick {
        if !self.logged_in {
            return FastTick::default();
        }
        FastTick {
            positions: true,
            option_chain: self.trading_active,
            market_data: self.trading_active,
        }
    }

    /// Gate for the slow (10s) tick: trade history once logged in.
    pub fn slow_tick(&self) -> bool {
        self.logged_in
    }
}
