// crates/dashboard-protocol/tests/recorded_responses.rs
use dashboard_core::{PerformanceMetrics, DISPLAY_ROWS};
use dashboard_protocol::{decode_option_chain, decode_trade_history, Reply};

#[test]
fn recorded_option_chain_decodes_in_server_order() {
    const BODY: &str = include_str!("data/option_chain_banknifty.json");

    let Reply::Accepted(chain) = decode_option_chain(BODY.as_bytes()).expect("valid json") else {
        panic!("recorded chain should be accepted");
    };

    assert_eq!(chain.options.len(), 25);
    assert_eq!(chain.visible_rows().len(), DISPLAY_ROWS);

    let strikes: Vec<f64> = chain.options.iter().map(|r| r.strike).collect();
    let mut sorted = strikes.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(strikes, sorted, "server order is preserved");

    let atm = chain.atm_row().expect("recorded chain has an ATM row");
    assert_eq!(atm.strike, 47_200.0);
    assert_eq!(atm.pcr, 1.2);
    assert_eq!(atm.ce.ltp, 100.35);
    assert_eq!(chain.heavy_put, Some(48_400.0));
}

#[test]
fn recorded_trade_history_feeds_metrics() {
    const BODY: &str = include_str!("data/trade_history.json");

    let Reply::Accepted(trades) = decode_trade_history(BODY.as_bytes()).expect("valid json") else {
        panic!("recorded history should be accepted");
    };
    assert_eq!(trades.len(), 3);
    assert_eq!(trades[2].exit_price, None);

    let metrics = PerformanceMetrics::from_trades(&trades).unwrap();
    assert_eq!(metrics.closed_trades, 2);
    assert_eq!(metrics.total_pnl, 3_907.5);
    assert_eq!(metrics.win_rate, 50.0);
    assert_eq!(metrics.avg_pnl, 1_953.75);
}
