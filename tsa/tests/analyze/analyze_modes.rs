use std::sync::Arc;

use tsa::{AnalysisOptions, DisplayResult, RawSeriesSet, SortBy, SortDirection, Stats, Tsa};
use tsa_mock::{MockBehavior, MockProvider};

use crate::helpers::{NOW, dynamic, labels, tsa_with};

#[tokio::test]
async fn hosts_fixture_ranked_by_mean_descending_by_default() {
    let tsa = tsa_with(Arc::new(MockProvider::new()));
    let analysis = tsa
        .analyze_at(&AnalysisOptions::new(), NOW)
        .await
        .expect("analysis");
    assert_eq!(
        labels(&analysis.result),
        vec!["db-1", "worker-1", "web-1", "cache-1"]
    );

    let table = analysis.result.as_table().unwrap();
    assert_eq!(table["db-1"].mean.to_string(), "61.19");
    assert_eq!(table["web-1"].mean.to_string(), "13.88");
    assert_eq!(table["cache-1"].min.to_string(), "2.50");
    assert_eq!(table["worker-1"].max.to_string(), "90.00");
}

#[tokio::test]
async fn explicit_sort_overrides_defaults() {
    let tsa = tsa_with(Arc::new(MockProvider::new()));
    let opts = AnalysisOptions::new()
        .sort_by(SortBy::Max)
        .sort_direction(SortDirection::Asc);
    let analysis = tsa.analyze_at(&opts, NOW).await.unwrap();
    assert_eq!(
        labels(&analysis.result),
        vec!["cache-1", "web-1", "db-1", "worker-1"]
    );
}

#[tokio::test]
async fn configured_defaults_apply_when_options_are_unset() {
    let tsa = Tsa::builder()
        .with_provider(Arc::new(MockProvider::new()))
        .default_sort_by(SortBy::Min)
        .default_sort_direction(SortDirection::Asc)
        .build()
        .unwrap();
    let analysis = tsa.analyze_at(&AnalysisOptions::new(), NOW).await.unwrap();
    // mins: web 12.5, db 55, cache 2.5, worker 10
    assert_eq!(
        labels(&analysis.result),
        vec!["cache-1", "worker-1", "web-1", "db-1"]
    );
}

#[tokio::test]
async fn aggregate_merges_all_labels() {
    let (tsa, controller) = dynamic("P0");
    controller
        .set_behavior(MockBehavior::Return(RawSeriesSet::labeled([
            ("a", vec![1.0, 2.0, 3.0]),
            ("b", vec![4.0, 5.0, 6.0]),
        ])))
        .await;
    let analysis = tsa
        .analyze_at(&AnalysisOptions::new().aggregate(true), NOW)
        .await
        .unwrap();
    assert_eq!(
        analysis.result,
        DisplayResult::Summary(Stats {
            min: 1.0,
            max: 6.0,
            mean: 3.5
        })
    );
    assert_eq!(
        analysis.result.as_summary().unwrap().to_string(),
        "Min: 1 Max: 6 Mean: 3.5"
    );
}

#[tokio::test]
async fn anonymous_series_ignores_aggregate_flag() {
    let (tsa, controller) = dynamic("P0");
    controller
        .set_behavior(MockBehavior::Return(RawSeriesSet::Anonymous(vec![
            10.0, 20.0, 30.0,
        ])))
        .await;
    for aggregate in [false, true] {
        let opts = AnalysisOptions::new()
            .aggregate(aggregate)
            .sort_by(SortBy::Min);
        let analysis = tsa.analyze_at(&opts, NOW).await.unwrap();
        assert_eq!(
            analysis.result,
            DisplayResult::Summary(Stats {
                min: 10.0,
                max: 30.0,
                mean: 20.0
            })
        );
    }
}

#[tokio::test]
async fn analysis_serializes_with_result_kind() {
    let tsa = tsa_with(Arc::new(MockProvider::new()));
    let analysis = tsa.analyze_at(&AnalysisOptions::new(), NOW).await.unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["result"]["kind"], "table");
    assert_eq!(json["window"]["end"], NOW);
    let back: tsa::Analysis = serde_json::from_value(json).unwrap();
    assert_eq!(back.window, analysis.window);
}
