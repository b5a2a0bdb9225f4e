use proptest::prelude::*;
use tsa::{AnalysisOptions, RawSeriesSet, SortBy, SortDirection};
use tsa_mock::MockBehavior;

use crate::helpers::{NOW, dynamic, labels};

fn arb_labeled() -> impl Strategy<Value = Vec<(String, Vec<f64>)>> {
    proptest::collection::btree_map(
        "[a-z]{1,6}",
        proptest::collection::vec(-1.0e4f64..1.0e4, 1..10),
        1..8,
    )
    .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn per_series_output_is_a_permutation_sorted_by_key(
        pairs in arb_labeled(),
        by in prop::sample::select(vec![SortBy::Min, SortBy::Max, SortBy::Mean]),
        dir in prop::sample::select(vec![SortDirection::Asc, SortDirection::Desc]),
    ) {
        tokio_test::block_on(async move {
            let (tsa, controller) = dynamic("P0");
            controller
                .set_behavior(MockBehavior::Return(RawSeriesSet::labeled(pairs.clone())))
                .await;
            let opts = AnalysisOptions::new().sort_by(by).sort_direction(dir);
            let analysis = tsa.analyze_at(&opts, NOW).await.unwrap();

            let mut got = labels(&analysis.result);
            let table = analysis.result.as_table().unwrap();
            let keys: Vec<_> = table
                .values()
                .map(|s| match by {
                    SortBy::Min => s.min,
                    SortBy::Max => s.max,
                    SortBy::Mean => s.mean,
                })
                .collect();
            for pair in keys.windows(2) {
                match dir {
                    SortDirection::Asc => assert!(pair[0] <= pair[1]),
                    SortDirection::Desc => assert!(pair[0] >= pair[1]),
                }
            }

            got.sort();
            let mut expected: Vec<String> = pairs.into_iter().map(|(l, _)| l).collect();
            expected.sort();
            assert_eq!(got, expected);
        });
    }
}
