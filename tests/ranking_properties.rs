//! Behavior tests for the ranking kernel
//!
//! These tests pin down the observable properties of volume ranking: which
//! assets are selected, in what order, and what metrics they carry.

use volrank_core::metrics::{mean_volume, percent_change};
use volrank_tests::{rank, series, sym, AssetSeries, Symbol};

// =============================================================================
// Ranking: Selection
// =============================================================================

#[test]
fn when_three_assets_are_ranked_for_two_slots_the_empty_one_is_dropped() {
    // Given: A and B with data, C with none
    let input = vec![
        series("A-USD", &[100.0, 105.0, 110.0], &[10.0, 20.0, 30.0]),
        series("B-USD", &[50.0, 40.0], &[100.0, 200.0]),
        AssetSeries::empty(sym("C-USD")),
    ];

    // When: the top two are selected
    let ranking = rank(&input, 2);

    // Then: B outranks A and C is absent everywhere
    assert_eq!(ranking.selection, vec![sym("B-USD"), sym("A-USD")]);
    let a = ranking.metrics_for(&sym("A-USD")).expect("A ranked");
    let b = ranking.metrics_for(&sym("B-USD")).expect("B ranked");
    assert!((a.percent_change.expect("defined") - 10.0).abs() < 1e-9);
    assert!((b.percent_change.expect("defined") + 20.0).abs() < 1e-9);
    assert!(ranking.metrics_for(&sym("C-USD")).is_none());
}

#[test]
fn when_every_series_is_empty_nothing_is_selected() {
    // Given: a universe where nothing traded
    let input: Vec<AssetSeries> = ["A-USD", "B-USD", "C-USD"]
        .iter()
        .map(|raw| AssetSeries::empty(sym(raw)))
        .collect();

    // When
    let ranking = rank(&input, 15);

    // Then
    assert!(ranking.is_empty());
    assert!(ranking.metrics.is_empty());
}

#[test]
fn when_top_n_exceeds_candidates_all_non_empty_assets_are_selected_descending() {
    // Given: five assets, one empty
    let input = vec![
        series("A-USD", &[1.0], &[3.0]),
        series("B-USD", &[1.0], &[50.0]),
        AssetSeries::empty(sym("C-USD")),
        series("D-USD", &[1.0], &[7.0]),
        series("E-USD", &[1.0], &[1.0]),
    ];

    // When: asking for more than exist
    let ranking = rank(&input, 15);

    // Then: min(N, non-empty) selected, volumes non-increasing
    assert_eq!(ranking.selection.len(), 4);
    let volumes: Vec<f64> = ranking.selected_metrics().map(|m| m.mean_volume).collect();
    assert!(volumes.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(ranking.selection[0], sym("B-USD"));
}

#[test]
fn selection_length_is_min_of_n_and_non_empty_count() {
    let input: Vec<AssetSeries> = (0..12)
        .map(|i| {
            if i % 3 == 0 {
                AssetSeries::empty(sym(&format!("E{i}-USD")))
            } else {
                series(&format!("S{i}-USD"), &[1.0], &[i as f64])
            }
        })
        .collect();

    for top_n in [1, 5, 8, 15] {
        let ranking = rank(&input, top_n);
        assert_eq!(ranking.selection.len(), top_n.min(8), "top_n={top_n}");
        assert!(ranking
            .selection
            .iter()
            .all(|s| !s.as_str().starts_with('E')));
    }
}

#[test]
fn equal_volumes_keep_universe_order() {
    let input = vec![
        series("C-USD", &[1.0], &[5.0]),
        series("A-USD", &[1.0], &[9.0]),
        series("B-USD", &[1.0], &[5.0]),
    ];

    let ranking = rank(&input, 3);

    assert_eq!(
        ranking.selection,
        vec![sym("A-USD"), sym("C-USD"), sym("B-USD")]
    );
}

#[test]
fn undefined_percent_change_is_a_warning_not_a_failure() {
    let input = vec![
        series("Z-USD", &[0.0, 2.0], &[10.0, 10.0]),
        series("A-USD", &[1.0, 2.0], &[1.0, 1.0]),
    ];

    let ranking = rank(&input, 15);

    assert_eq!(ranking.selection, vec![sym("Z-USD"), sym("A-USD")]);
    assert_eq!(ranking.warnings.len(), 1);
    assert!(ranking
        .metrics_for(&sym("Z-USD"))
        .is_some_and(|m| m.percent_change.is_none()));
}

// =============================================================================
// Metrics: Aggregates
// =============================================================================

#[test]
fn mean_volume_does_not_depend_on_row_order() {
    let volumes = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0];
    let mut reversed = volumes;
    reversed.reverse();
    let prices = [1.0; 6];

    let forward = mean_volume(&series("A-USD", &prices, &volumes)).expect("non-empty");
    let backward = mean_volume(&series("A-USD", &prices, &reversed)).expect("non-empty");

    assert!((forward - 18.0).abs() < 1e-9);
    assert!((forward - backward).abs() < 1e-9);
}

#[test]
fn percent_change_matches_first_to_last_formula() {
    let cases: [(&[f64], f64); 3] = [
        (&[200.0, 50.0, 300.0], 50.0),
        (&[8.0, 2.0], -75.0),
        (&[3.5], 0.0),
    ];

    for (prices, expected) in cases {
        let volumes = vec![1.0; prices.len()];
        let change = percent_change(&series("A-USD", prices, &volumes)).expect("defined");
        assert!((change - expected).abs() < 1e-9, "{prices:?}");
    }
}

#[test]
fn metrics_are_keyed_by_symbol_in_input_order() {
    let input = vec![
        series("B-USD", &[1.0], &[1.0]),
        series("A-USD", &[1.0], &[2.0]),
    ];

    let ranking = rank(&input, 1);

    let keys: Vec<&Symbol> = ranking.metrics.keys().collect();
    assert_eq!(keys, vec![&sym("B-USD"), &sym("A-USD")]);
    assert_eq!(ranking.selection, vec![sym("A-USD")]);
}
