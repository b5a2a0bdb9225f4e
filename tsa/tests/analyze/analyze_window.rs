use tsa::{AnalysisOptions, RawSeriesSet, TimeWindow, Tsa, WindowConfig, now_ms};
use tsa_mock::{DynamicMockProvider, MockBehavior};

use crate::helpers::{HOUR_MS, NOW, dynamic};

async fn returning_one(controller: &tsa_mock::DynamicMockController) {
    controller
        .set_behavior(MockBehavior::Return(RawSeriesSet::Anonymous(vec![1.0])))
        .await;
}

#[tokio::test]
async fn default_window_is_last_hour() {
    let (tsa, controller) = dynamic("P0");
    returning_one(&controller).await;
    let analysis = tsa.analyze_at(&AnalysisOptions::new(), NOW).await.unwrap();
    let expected = TimeWindow {
        start: NOW - HOUR_MS,
        end: NOW,
        step: 3_600,
    };
    assert_eq!(analysis.window, expected);
    assert_eq!(controller.requested_windows().await, vec![expected]);
}

#[tokio::test]
async fn relative_until_and_since_are_passed_to_provider() {
    let (tsa, controller) = dynamic("P0");
    returning_one(&controller).await;
    let opts = AnalysisOptions::new().since("6h").until("1d").step("60");
    tsa.analyze_at(&opts, NOW).await.unwrap();

    let end = NOW - 24 * HOUR_MS;
    assert_eq!(
        controller.requested_windows().await,
        vec![TimeWindow {
            start: end - 6 * HOUR_MS,
            end,
            step: 60,
        }]
    );
}

#[tokio::test]
async fn options_reach_the_provider_verbatim() {
    let (tsa, controller) = dynamic("P0");
    returning_one(&controller).await;
    let mut opts = AnalysisOptions::new().since("15m").aggregate(true);
    opts.extra
        .insert("query".into(), serde_json::Value::from("cpu{host=*}"));
    tsa.analyze_at(&opts, NOW).await.unwrap();

    let requests = controller.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].1, opts);
}

#[tokio::test]
async fn short_span_floors_step() {
    let (tsa, controller) = dynamic("P0");
    returning_one(&controller).await;
    let analysis = tsa
        .analyze_at(&AnalysisOptions::new().since("10s"), NOW)
        .await
        .unwrap();
    assert_eq!(analysis.window.step, 30);
}

#[tokio::test]
async fn configured_window_constants_are_used() {
    let (provider, controller) = DynamicMockProvider::new_with_controller("P0");
    returning_one(&controller).await;
    let tsa = Tsa::builder()
        .with_provider(provider)
        .window_config(WindowConfig {
            default_lookback_ms: 2 * HOUR_MS,
            target_points: 100,
            min_step: 30,
        })
        .build()
        .unwrap();
    let analysis = tsa.analyze_at(&AnalysisOptions::new(), NOW).await.unwrap();
    assert_eq!(
        analysis.window,
        TimeWindow {
            start: NOW - 2 * HOUR_MS,
            end: NOW,
            step: 72_000,
        }
    );
}

#[tokio::test]
async fn analyze_anchors_on_wall_clock() {
    let (tsa, controller) = dynamic("P0");
    returning_one(&controller).await;
    let before = now_ms();
    let analysis = tsa.analyze(&AnalysisOptions::new()).await.unwrap();
    let after = now_ms();
    assert!(analysis.window.end >= before && analysis.window.end <= after);
    assert_eq!(analysis.window.span_ms(), HOUR_MS);
}

#[test]
fn window_is_pure_and_does_not_fetch() {
    let (tsa, _controller) = dynamic("P0");
    let w = tsa
        .window(&AnalysisOptions::new().until("now").since("30m"), NOW)
        .unwrap();
    assert_eq!(w.end, NOW);
    assert_eq!(w.start, NOW - HOUR_MS / 2);
    assert_eq!(w.step, 1_800);
}
