use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tsa::{
    AnalysisOptions, RawSeriesSet, SeriesProvider, TimeWindow, Tsa, TsaError,
};
use tsa_mock::MockBehavior;

use crate::helpers::{NOW, dynamic, tsa_with};

/// Provider that returns a non-provider error kind.
struct Misbehaving;

#[async_trait]
impl SeriesProvider for Misbehaving {
    fn name(&self) -> &'static str {
        "misbehaving"
    }

    async fn fetch(
        &self,
        _window: TimeWindow,
        _options: &AnalysisOptions,
    ) -> Result<RawSeriesSet, TsaError> {
        Err(TsaError::InvalidArg("unsupported query".into()))
    }
}

#[tokio::test]
async fn malformed_tokens_fail_before_fetch() {
    let (tsa, controller) = dynamic("P0");
    controller
        .set_behavior(MockBehavior::Return(RawSeriesSet::Anonymous(vec![1.0])))
        .await;

    for opts in [
        AnalysisOptions::new().since("abc"),
        AnalysisOptions::new().until("yesterday"),
        AnalysisOptions::new().step("fast"),
    ] {
        let err = tsa.analyze_at(&opts, NOW).await.expect_err("parse error");
        assert!(matches!(err, TsaError::Parse { .. }), "{err:?}");
    }
    assert!(controller.requests().await.is_empty());
}

#[tokio::test]
async fn negative_lookback_is_invalid_argument() {
    let (tsa, controller) = dynamic("P0");
    let err = tsa
        .analyze_at(&AnalysisOptions::new().since("-1h"), NOW)
        .await
        .expect_err("invalid lookback");
    assert!(matches!(err, TsaError::InvalidArg(_)));
    assert!(controller.requests().await.is_empty());
}

#[tokio::test]
async fn provider_errors_pass_through_unchanged() {
    let (tsa, controller) = dynamic("P0");
    let upstream = TsaError::provider("P0", "connection refused");
    controller
        .set_behavior(MockBehavior::Fail(upstream.clone()))
        .await;
    let err = tsa
        .analyze_at(&AnalysisOptions::new(), NOW)
        .await
        .expect_err("provider failure");
    assert_eq!(err, upstream);
    assert_eq!(controller.requests().await.len(), 1);
}

#[tokio::test]
async fn other_error_kinds_are_tagged_with_provider_name() {
    let tsa = tsa_with(Arc::new(Misbehaving));
    let err = tsa
        .analyze_at(&AnalysisOptions::new(), NOW)
        .await
        .expect_err("wrapped");
    assert_eq!(
        err,
        TsaError::provider("misbehaving", "invalid argument: unsupported query")
    );
}

#[tokio::test(start_paused = true)]
async fn hanging_provider_times_out() {
    let (provider, controller) = tsa_mock::DynamicMockProvider::new_with_controller("slow");
    controller.set_behavior(MockBehavior::Hang).await;
    let tsa = Tsa::builder()
        .with_provider(provider)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let err = tsa
        .analyze_at(&AnalysisOptions::new(), NOW)
        .await
        .expect_err("timeout");
    assert_eq!(err, TsaError::provider_timeout("slow"));
}

#[tokio::test]
async fn empty_series_is_an_error_not_zeros() {
    let (tsa, controller) = dynamic("P0");
    controller
        .set_behavior(MockBehavior::Return(RawSeriesSet::labeled([
            ("present", vec![7.0, 9.0]),
            ("missing", vec![]),
        ])))
        .await;
    let err = tsa
        .analyze_at(&AnalysisOptions::new(), NOW)
        .await
        .expect_err("empty series");
    assert_eq!(err, TsaError::empty_series(Some("missing")));

    // aggregate mode only needs the concatenation to be non-empty
    let ok = tsa
        .analyze_at(&AnalysisOptions::new().aggregate(true), NOW)
        .await
        .expect("aggregate over non-empty concatenation");
    assert_eq!(ok.result.as_summary().unwrap().mean, 8.0);
}

#[tokio::test]
async fn non_finite_samples_are_rejected() {
    let (tsa, controller) = dynamic("P0");
    controller
        .set_behavior(MockBehavior::Return(RawSeriesSet::labeled([(
            "bad",
            vec![1.0, f64::NAN],
        )])))
        .await;
    let err = tsa
        .analyze_at(&AnalysisOptions::new(), NOW)
        .await
        .expect_err("nan");
    assert!(matches!(err, TsaError::NonFiniteSample { .. }));
}

#[tokio::test]
async fn fractional_step_is_truncated_not_rejected() {
    let (tsa, controller) = dynamic("P0");
    controller
        .set_behavior(MockBehavior::Return(RawSeriesSet::Anonymous(vec![1.0])))
        .await;
    let analysis = tsa
        .analyze_at(&AnalysisOptions::new().step("90.7"), NOW)
        .await
        .expect("numeric step");
    assert_eq!(analysis.window.step, 90);
    assert_eq!(controller.requested_windows().await, vec![analysis.window]);
}

#[test]
fn builder_rejects_step_floor_below_thirty() {
    let (provider, _controller) = tsa_mock::DynamicMockProvider::new_with_controller("P0");
    let res = Tsa::builder()
        .with_provider(provider)
        .window_config(tsa::WindowConfig {
            min_step: 1,
            ..tsa::WindowConfig::default()
        })
        .build();
    assert!(matches!(res, Err(TsaError::InvalidArg(_))));
}

#[test]
fn builder_rejects_bad_window_config() {
    let (provider, _controller) = tsa_mock::DynamicMockProvider::new_with_controller("P0");
    let res = Tsa::builder()
        .with_provider(provider)
        .window_config(tsa::WindowConfig {
            default_lookback_ms: 0,
            ..tsa::WindowConfig::default()
        })
        .build();
    assert!(matches!(res, Err(TsaError::InvalidArg(_))));
}
