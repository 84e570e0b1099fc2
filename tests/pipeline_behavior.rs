//! Behavior tests for dashboard runs
//!
//! These tests verify how a run fetches, memoizes, and fails when driven
//! through the public `Pipeline` API with an in-memory source.

use volrank_core::cache::CacheMode;
use volrank_core::{SeriesCache, SourceErrorKind};
use volrank_tests::{
    config, series, sym, Arc, AssetSeries, Pipeline, PipelineError, StaticSource,
    ValidationError,
};

fn source() -> Arc<StaticSource> {
    Arc::new(StaticSource::new(vec![
        series("A-USD", &[100.0, 105.0, 110.0], &[10.0, 20.0, 30.0]),
        series("B-USD", &[50.0, 40.0], &[100.0, 200.0]),
    ]))
}

// =============================================================================
// Pipeline: Memoized Fetch
// =============================================================================

#[tokio::test]
async fn when_the_same_year_is_selected_twice_the_source_is_called_once_per_symbol() {
    // Given: a three-symbol universe
    let source = source();
    let pipeline = Pipeline::new(source.clone(), &config(&["A-USD", "B-USD", "C-USD"], 2));

    // When: 2023 is selected twice
    let first = pipeline.run(2023).await.expect("first run");
    let second = pipeline.run(2023).await.expect("second run");

    // Then: only the first run touched the source
    assert_eq!(source.calls(), 3);
    assert!(!first.cache_hit);
    assert!(second.cache_hit);
    assert_eq!(second.ranking.selection, vec![sym("B-USD"), sym("A-USD")]);
}

#[tokio::test]
async fn when_a_new_year_is_selected_the_universe_is_fetched_again() {
    let source = source();
    let pipeline = Pipeline::new(source.clone(), &config(&["A-USD", "B-USD"], 2));

    pipeline.run(2023).await.expect("2023");
    pipeline.run(2022).await.expect("2022");
    pipeline.run(2023).await.expect("2023 again");

    assert_eq!(source.calls(), 4);
    assert_eq!(pipeline.cache().len().await, 2);
}

#[tokio::test]
async fn refresh_mode_refetches_but_keeps_the_memo_warm() {
    let source = source();
    let cache = SeriesCache::new();
    let universe = config(&["A-USD", "B-USD"], 2);

    let refreshing = Pipeline::new(source.clone(), &universe)
        .with_cache(cache.clone())
        .with_cache_mode(CacheMode::Refresh);
    refreshing.run(2021).await.expect("refresh");
    refreshing.run(2021).await.expect("refresh again");
    assert_eq!(source.calls(), 4);

    // A second pipeline sharing the memo reads what the first stored.
    let reading = Pipeline::new(source.clone(), &universe).with_cache(cache);
    let report = reading.run(2021).await.expect("cached");
    assert!(report.cache_hit);
    assert_eq!(source.calls(), 4);
}

// =============================================================================
// Pipeline: Report Contents
// =============================================================================

#[tokio::test]
async fn report_carries_selection_metrics_and_charts_for_the_year() {
    let pipeline = Pipeline::new(source(), &config(&["A-USD", "B-USD", "C-USD"], 2));

    let report = pipeline.run(2020).await.expect("run");

    assert_eq!(report.year, 2020);
    assert_eq!(report.range.start().year(), 2020);
    assert_eq!(report.ranking.metrics.len(), 2);
    assert_eq!(report.charts.len(), 2);
    assert_eq!(report.charts[0].symbol, sym("B-USD"));
    let prices: Vec<f64> = report.charts[0].points.iter().map(|p| p.adj_close).collect();
    assert_eq!(prices, vec![50.0, 40.0]);
}

#[tokio::test]
async fn a_year_with_no_data_yields_an_empty_report() {
    let source = Arc::new(StaticSource::new(Vec::<AssetSeries>::new()));
    let pipeline = Pipeline::new(source, &config(&["A-USD", "B-USD"], 15));

    let report = pipeline.run(2018).await.expect("empty is not an error");

    assert!(report.ranking.is_empty());
    assert!(report.charts.is_empty());
}

// =============================================================================
// Pipeline: Failures
// =============================================================================

#[tokio::test]
async fn when_one_symbol_fails_the_run_aborts_and_nothing_is_cached() {
    // Given: the second symbol's provider is down
    let source = Arc::new(
        StaticSource::new(vec![series("A-USD", &[1.0], &[1.0])]).failing_on("B-USD"),
    );
    let pipeline = Pipeline::new(source.clone(), &config(&["A-USD", "B-USD", "C-USD"], 2));

    // When
    let error = pipeline.run(2023).await.expect_err("source failure aborts");

    // Then: no partial ranking, later symbols untouched, memo empty
    match error {
        PipelineError::Source(source_error) => {
            assert_eq!(source_error.kind(), SourceErrorKind::Unavailable);
        }
        other => panic!("expected source error, got {other:?}"),
    }
    assert_eq!(source.calls(), 2);
    assert!(pipeline.cache().is_empty().await);
}

#[tokio::test]
async fn years_outside_the_selectable_range_are_rejected_before_fetching() {
    let source = source();
    let pipeline = Pipeline::new(source.clone(), &config(&["A-USD"], 1));

    for year in [2017, 2024] {
        let error = pipeline.run(year).await.expect_err("out of range");
        assert!(matches!(
            error,
            PipelineError::Validation(ValidationError::YearOutOfRange { .. })
        ));
    }
    assert_eq!(source.calls(), 0);
}
