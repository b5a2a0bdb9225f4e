use tsa_core::RawSeriesSet;

/// Fixture names understood by [`by_name`].
pub const NAMES: &[&str] = &["hosts", "latency", "pair", "sparse", "empty"];

/// Deterministic sample sets keyed by fixture name.
#[must_use]
pub fn by_name(name: &str) -> Option<RawSeriesSet> {
    match name {
        // per-host CPU percentages, provider order deliberately unsorted
        "hosts" => Some(RawSeriesSet::labeled([
            ("web-1", vec![12.5, 14.0, 13.25, 15.75]),
            ("db-1", vec![55.0, 61.5, 58.25, 70.0]),
            ("cache-1", vec![3.0, 2.5, 4.0, 2.5]),
            ("worker-1", vec![30.0, 90.0, 10.0, 22.0]),
        ])),
        "latency" => Some(RawSeriesSet::Anonymous(vec![
            10.0, 20.0, 30.0, 25.0, 15.0,
        ])),
        "pair" => Some(RawSeriesSet::labeled([
            ("a", vec![1.0, 2.0, 3.0]),
            ("b", vec![4.0, 5.0, 6.0]),
        ])),
        "sparse" => Some(RawSeriesSet::labeled([
            ("present", vec![7.0, 9.0]),
            ("missing", vec![]),
        ])),
        "empty" => Some(RawSeriesSet::Anonymous(vec![])),
        _ => None,
    }
}
