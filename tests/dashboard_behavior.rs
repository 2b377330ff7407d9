//! Controller behavior: init with fallback, re-render on selection, the
//! prediction pipeline, company filtering, and the ticker's explicit
//! unavailable state.

use std::collections::BTreeMap;

use stockboard_core::{Symbol, TimeRange};
use stockboard_dashboard::{
    Dashboard, DashboardError, Direction, HeadlessSurface, MarketEntry, TickerEntry, TickerState,
};
use stockboard_tests::{report, ScriptedApi};

fn dashboard(api: ScriptedApi) -> Dashboard<ScriptedApi, HeadlessSurface> {
    Dashboard::new(api, HeadlessSurface::new()).expect("dashboard")
}

#[tokio::test]
async fn init_falls_back_to_static_companies_and_renders_default_symbol() {
    let api = ScriptedApi::new().with_report(
        "AAPL",
        TimeRange::OneMonth,
        report("AAPL", &[10.0, 12.0, 14.0], 14.0),
    );
    let mut dashboard = dashboard(api);

    dashboard.init().await.expect("init");

    assert_eq!(dashboard.session().companies().len(), 15);
    assert_eq!(dashboard.session().current_symbol().as_str(), "AAPL");
    assert_eq!(dashboard.surface().live_count(), 1);

    let info = dashboard.info().expect("info view");
    assert_eq!(info.price, "$14.00");

    let prediction = dashboard.prediction().expect("prediction view");
    assert_eq!(prediction.price, "$16.00");
    assert_eq!(prediction.direction, Direction::Up);
}

#[tokio::test]
async fn selection_refetches_and_leaves_one_chart_instance() {
    let api = ScriptedApi::new()
        .with_report(
            "AAPL",
            TimeRange::OneMonth,
            report("AAPL", &[10.0, 12.0], 12.0),
        )
        .with_report(
            "TSLA",
            TimeRange::OneMonth,
            report("TSLA", &[250.0, 240.0], 240.0),
        )
        .with_report(
            "TSLA",
            TimeRange::OneYear,
            report("TSLA", &[200.0, 220.0, 240.0], 240.0),
        );
    let mut dashboard = dashboard(api);

    dashboard.init().await.expect("init");
    dashboard
        .select_company(Symbol::parse("TSLA").expect("symbol"))
        .await
        .expect("select company");
    dashboard
        .select_range(TimeRange::OneYear)
        .await
        .expect("select range");

    assert_eq!(dashboard.session().current_symbol().as_str(), "TSLA");
    assert_eq!(dashboard.session().current_range(), TimeRange::OneYear);
    // Three renders so far, exactly one live instance.
    assert_eq!(dashboard.surface().live_count(), 1);

    let info = dashboard.info().expect("info view");
    assert_eq!(info.header, "TSLA Test Co. (TSLA)");
}

#[tokio::test]
async fn failed_fetch_surfaces_the_error_and_keeps_prior_view() {
    let api = ScriptedApi::new().with_report(
        "AAPL",
        TimeRange::OneMonth,
        report("AAPL", &[10.0, 12.0], 12.0),
    );
    let mut dashboard = dashboard(api);
    dashboard.init().await.expect("init");

    let err = dashboard
        .select_company(Symbol::parse("MSFT").expect("symbol"))
        .await
        .expect_err("unscripted symbol must fail");
    assert!(matches!(err, DashboardError::Gateway(_)));

    // The last committed report is still on screen.
    assert_eq!(dashboard.surface().live_count(), 1);
    assert!(dashboard.info().is_some());
}

#[tokio::test]
async fn single_point_history_is_an_insufficient_data_error() {
    let api = ScriptedApi::new().with_report(
        "AAPL",
        TimeRange::OneMonth,
        report("AAPL", &[10.0], 10.0),
    );
    let mut dashboard = dashboard(api);

    let err = dashboard.init().await.expect_err("must fail");
    assert!(matches!(err, DashboardError::Validation(_)));
}

#[tokio::test]
async fn filter_matches_by_name_and_by_symbol() {
    let api = ScriptedApi::new().with_report(
        "AAPL",
        TimeRange::OneMonth,
        report("AAPL", &[10.0, 12.0], 12.0),
    );
    let mut dashboard = dashboard(api);
    dashboard.init().await.expect("init");

    let matched = dashboard.filter_companies("ms");
    let names: Vec<&str> = matched.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"Microsoft Corporation"));
    assert!(names.contains(&"Meta Platforms Inc."));

    assert_eq!(dashboard.filter_companies("tesla").len(), 1);
}

#[tokio::test]
async fn ticker_renders_entries_and_flags_total_failure() {
    let mut entries = BTreeMap::new();
    entries.insert(
        "AAPL".to_owned(),
        MarketEntry::Quote {
            price: 190.0,
            change: 2.0,
            change_percent: 1.06,
        },
    );
    entries.insert(
        "TSLA".to_owned(),
        MarketEntry::Failed {
            error: "Failed to fetch data for TSLA".to_owned(),
        },
    );

    let api = ScriptedApi::new()
        .with_report(
            "AAPL",
            TimeRange::OneMonth,
            report("AAPL", &[10.0, 12.0], 12.0),
        )
        .with_market_data(entries);
    let mut dashboard = dashboard(api);
    dashboard.init().await.expect("init");

    let TickerState::Quotes(quotes) = dashboard.update_ticker().await else {
        panic!("batch should succeed");
    };
    assert_eq!(quotes.len(), 2);
    assert!(matches!(
        quotes["AAPL"],
        TickerEntry::Price { ref text, direction: Direction::Up } if text == "$190.00"
    ));
    assert_eq!(quotes["TSLA"], TickerEntry::Unavailable);

    // No scripted market data at all: explicit unavailable state.
    let api = ScriptedApi::new().with_report(
        "AAPL",
        TimeRange::OneMonth,
        report("AAPL", &[10.0, 12.0], 12.0),
    );
    let mut dashboard = self::dashboard(api);
    dashboard.init().await.expect("init");
    assert_eq!(*dashboard.update_ticker().await, TickerState::Unavailable);
}
