// crates/dashboard-core/tests/trading_day_scenarios.rs
use dashboard_core::{
    format_number, format_rupees, MarketOverview, MarketSnapshot, OptionChain, OptionLeg,
    OptionRow, PerformanceMetrics, PnlTone, Position, Session, TradeRecord, TradeStatus,
};

fn trade(symbol: &str, status: &str, pnl: Option<f64>) -> TradeRecord {
    TradeRecord {
        timestamp: "2024-03-01T11:20:00".to_string(),
        symbol: symbol.to_string(),
        strike: 47_000.0,
        option_type: "PUT".to_string(),
        side: "BUY".to_string(),
        entry_price: 180.0,
        exit_price: pnl.map(|p| 180.0 + p / 15.0),
        quantity: 15,
        pnl,
        pnl_percentage: pnl.map(|p| p / (180.0 * 15.0) * 100.0),
        status: TradeStatus::parse(status),
    }
}

#[test]
fn a_day_of_trades_summarises_closed_only() {
    let trades = vec![
        trade("BANKNIFTY47000PE", "CLOSED", Some(1_350.0)),
        trade("BANKNIFTY47100PE", "CLOSED", Some(-675.0)),
        trade("BANKNIFTY47200CE", "CLOSED", Some(225.0)),
        trade("BANKNIFTY47300CE", "CLOSED", Some(-450.0)),
        trade("BANKNIFTY47400CE", "OPEN", None),
    ];

    let metrics = PerformanceMetrics::from_trades(&trades).expect("non-empty history");

    assert_eq!(metrics.closed_trades, 4);
    assert_eq!(format_rupees(metrics.total_pnl), "₹450.00");
    assert_eq!(format!("{:.1}%", metrics.win_rate), "50.0%");
    assert_eq!(format_rupees(metrics.avg_pnl), "₹112.50");
    assert_eq!(metrics.total_pnl_tone(), PnlTone::Profit);
}

#[test]
fn only_open_trades_render_zero_win_rate() {
    let trades = vec![trade("NIFTY22000CE", "OPEN", None)];
    let metrics = PerformanceMetrics::from_trades(&trades).unwrap();
    assert_eq!(format!("{:.1}%", metrics.win_rate), "0.0%");
    assert_eq!(metrics.closed_trades, 0);
}

#[test]
fn position_tone_matches_pnl_sign() {
    let positions = [
        Position {
            symbol: "NIFTY22000CE".to_string(),
            pnl: 120.0,
            ..Position::default()
        },
        Position {
            symbol: "NIFTY22000PE".to_string(),
            pnl: -80.0,
            ..Position::default()
        },
        Position {
            symbol: "NIFTY22100CE".to_string(),
            pnl: 0.0,
            ..Position::default()
        },
    ];

    let tones: Vec<PnlTone> = positions.iter().map(Position::pnl_tone).collect();
    assert_eq!(tones, vec![PnlTone::Profit, PnlTone::Loss, PnlTone::Profit]);
}

#[test]
fn overview_tracks_chain_then_background_snapshot() {
    let session = Session {
        logged_in: true,
        trading_active: true,
    };
    assert!(session.fast_tick().option_chain);

    let leg = OptionLeg {
        oi: 12_345_678.0,
        volume: 250_000.0,
        ltp: 212.4,
        iv: 14.2,
    };
    let chain = OptionChain {
        underlying_value: 47_051.1,
        options: vec![OptionRow {
            strike: 47_000.0,
            ce: leg,
            pe: leg,
            atm: true,
            pcr: 0.987,
        }],
        ..OptionChain::default()
    };
    assert_eq!(format_number(chain.options[0].ce.oi), "1.23Cr");

    let mut overview = MarketOverview::default();
    overview.apply_chain(&chain, chrono::Local::now());
    assert_eq!(overview.pcr.as_deref(), Some("0.99"));

    overview.apply_snapshot(
        &MarketSnapshot {
            current_price: Some(47_060.25),
            pcr: Some(0.95),
            max_pain: Some(47_100.0),
            ..MarketSnapshot::default()
        },
        chrono::Local::now(),
    );
    assert_eq!(overview.underlying_value.as_deref(), Some("47060.25"));
    assert_eq!(overview.pcr.as_deref(), Some("0.95"));
    assert_eq!(overview.atm_strike.as_deref(), Some("47100"));
}
