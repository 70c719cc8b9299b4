//! Option chain snapshot for one underlying.

/// Number of strikes shown in the option chain panel.
pub const DISPLAY_ROWS: usize = 20;

/// One side (call or put) of a strike.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OptionLeg {
    pub oi: f64,
    pub volume: f64,
    pub ltp: f64,
    pub iv: f64,
}

/// A single strike row of the chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionRow {
    pub strike: f64,
    pub ce: OptionLeg,
    pub pe: OptionLeg,
    /// Marks the at-the-money strike.
    pub atm: bool,
    /// Put/call ratio at this strike.
    pub pcr: f64,
}

/// Snapshot of the chain as served by the backend.
///
/// Rows keep the server's order. The chain-level analytics are optional
/// because older backends only send `underlying_value` and `options`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionChain {
    pub underlying_value: f64,
    pub options: Vec<OptionRow>,
    pub pcr: Option<f64>,
    pub max_pain: Option<f64>,
    pub heavy_call: Option<f64>,
    pub heavy_put: Option<f64>,
}

impl OptionChain {
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The rows that make it to the screen: the first [`DISPLAY_ROWS`].
    pub fn visible_rows(&self) -> &[OptionRow] {
        let end = self.options.len().min(DISPLAY_ROWS);
        &self.options[..end]
    }

    /// First row flagged ATM, searched across the whole chain.
    pub fn atm_row(&self) -> Option<&OptionRow> {
        self.options.iter().find(|row| row.atm)
    }
}
