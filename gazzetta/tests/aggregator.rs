mod helpers;

use std::sync::Arc;
use std::time::Duration;

use gazzetta::{Aggregator, FanOutStrategy, GazzettaError};
use gazzetta_mock::{DynamicMockAdapter, MockAdapter, MockBehavior};
use helpers::{AAPL, titled};

fn title_of(r: &gazzetta::RawArticle) -> &str {
    r.get("title").and_then(|v| v.as_str()).unwrap_or_default()
}

async fn ordered_under_delay(strategy: FanOutStrategy) {
    let (slow, slow_ctl) = DynamicMockAdapter::new_with_controller("slow");
    let (fast, fast_ctl) = DynamicMockAdapter::new_with_controller("fast");
    slow_ctl
        .set_behavior(
            AAPL,
            MockBehavior::Delayed(
                Duration::from_millis(60),
                vec![titled("slow-1"), titled("slow-2")],
            ),
        )
        .await;
    fast_ctl
        .set_behavior(AAPL, MockBehavior::Return(vec![titled("fast-1")]))
        .await;

    let mut agg = Aggregator::new();
    agg.set_strategy(strategy);
    agg.register(slow);
    agg.register(fast);

    let report = agg.aggregate(AAPL, 5).await;
    let got: Vec<_> = report.articles.iter().map(title_of).collect();
    assert_eq!(got, ["slow-1", "slow-2", "fast-1"]);
    assert!(report.errors.is_empty());
    assert_eq!(report.attempted, 2);
}

#[tokio::test]
async fn concurrent_merge_follows_registration_order() {
    ordered_under_delay(FanOutStrategy::Concurrent).await;
}

#[tokio::test]
async fn sequential_merge_follows_registration_order() {
    ordered_under_delay(FanOutStrategy::Sequential).await;
}

#[tokio::test]
async fn failure_is_isolated_and_indexed() {
    let (bad, bad_ctl) = DynamicMockAdapter::new_with_controller("bad");
    bad_ctl
        .set_fallback(MockBehavior::Fail(GazzettaError::status("bad", 500)))
        .await;

    let mut agg = Aggregator::new();
    agg.register(Arc::new(MockAdapter::new()));
    agg.register(bad);

    let report = agg.aggregate(AAPL, 5).await;
    assert!(!report.articles.is_empty());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].adapter, "bad");
    assert_eq!(report.errors[0].index, 1);
    assert_eq!(report.errors[0].error, GazzettaError::status("bad", 500));
    assert!(report.failure().is_none());
}

#[tokio::test]
async fn panicking_adapter_does_not_disturb_siblings() {
    let (boom, boom_ctl) = DynamicMockAdapter::new_with_controller("boom");
    boom_ctl
        .set_fallback(MockBehavior::Panic("adapter bug".into()))
        .await;
    let (ok, ok_ctl) = DynamicMockAdapter::new_with_controller("ok");
    ok_ctl
        .set_fallback(MockBehavior::Return(vec![titled("survivor")]))
        .await;

    for strategy in [FanOutStrategy::Concurrent, FanOutStrategy::Sequential] {
        let mut agg = Aggregator::new();
        agg.set_strategy(strategy);
        agg.register(Arc::clone(&boom));
        agg.register(Arc::clone(&ok));

        let report = agg.aggregate(AAPL, 5).await;
        let got: Vec<_> = report.articles.iter().map(title_of).collect();
        assert_eq!(got, ["survivor"]);
        assert_eq!(
            report.errors[0].error,
            GazzettaError::provider_panicked("boom")
        );
    }
}

#[tokio::test]
async fn hanging_adapter_times_out_when_bounded() {
    let (stuck, stuck_ctl) = DynamicMockAdapter::new_with_controller("stuck");
    stuck_ctl.set_fallback(MockBehavior::Hang).await;

    let mut agg = Aggregator::new();
    agg.set_adapter_timeout(Some(Duration::from_millis(30)));
    agg.register(stuck);
    agg.register(Arc::new(MockAdapter::new()));

    let report = agg.aggregate(AAPL, 5).await;
    assert_eq!(
        report.errors[0].error,
        GazzettaError::provider_timeout("stuck")
    );
    assert!(!report.articles.is_empty());
}

#[tokio::test]
async fn all_failed_collapses_into_one_error() {
    let mut agg = Aggregator::new();
    agg.register(Arc::new(MockAdapter::new()));
    agg.register(Arc::new(MockAdapter::with_flavor(
        "second",
        gazzetta_mock::MockFlavor::Yahoo,
    )));

    let report = agg.aggregate("FAIL", 5).await;
    assert!(report.articles.is_empty());
    assert!(report.is_total_failure());
    match report.failure() {
        Some(GazzettaError::AllProvidersFailed(errs)) => assert_eq!(errs.len(), 2),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn empty_aggregator_yields_empty_report() {
    let agg = Aggregator::new();
    assert!(agg.is_empty());
    let report = agg.aggregate(AAPL, 5).await;
    assert!(report.articles.is_empty());
    assert!(report.errors.is_empty());
    assert!(report.failure().is_none());
}

#[tokio::test]
async fn every_adapter_sees_the_same_request() {
    let (a, a_ctl) = DynamicMockAdapter::new_with_controller("a");
    let (b, b_ctl) = DynamicMockAdapter::new_with_controller("b");
    let mut agg = Aggregator::new();
    agg.register(a);
    agg.register(b);

    let _ = agg.aggregate(AAPL, 0).await;
    // a zero limit is raised to one before reaching adapters
    assert_eq!(a_ctl.requests().await, vec![(AAPL.to_string(), 1)]);
    assert_eq!(b_ctl.requests().await, vec![(AAPL.to_string(), 1)]);
}

#[tokio::test(start_paused = true)]
async fn concurrent_fan_out_overlaps_calls() {
    let mut agg = Aggregator::new();
    for name in ["p1", "p2", "p3"] {
        let (adapter, ctl) = DynamicMockAdapter::new_with_controller(name);
        ctl.set_fallback(MockBehavior::Delayed(Duration::from_millis(100), vec![]))
            .await;
        agg.register(adapter);
    }

    let started = tokio::time::Instant::now();
    let _ = agg.aggregate(AAPL, 5).await;
    assert!(started.elapsed() < Duration::from_millis(250));

    agg.set_strategy(FanOutStrategy::Sequential);
    let started = tokio::time::Instant::now();
    let _ = agg.aggregate(AAPL, 5).await;
    assert!(started.elapsed() >= Duration::from_millis(300));
}
