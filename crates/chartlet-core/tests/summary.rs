// File: crates/chartlet-core/tests/summary.rs
// Purpose: Series statistics: tie-break policy, empty-series behavior,
// and the series constructors.

use chartlet_core::{
    pie_series_list, points_from_values, PieSeriesOption, Series, SeriesKind, SeriesList,
};

#[test]
fn summary_reports_first_occurrence_on_ties() {
    let series = Series::from_values(&[3.0, 1.0, 1.0, 5.0, 5.0], SeriesKind::Line);
    let summary = series.summary();

    assert_eq!(summary.min_index, Some(1));
    assert_eq!(summary.min_value, 1.0);
    assert_eq!(summary.max_index, Some(3));
    assert_eq!(summary.max_value, 5.0);
    assert_eq!(summary.average_value, 3.0);
}

#[test]
fn summary_of_single_point() {
    let summary = Series::from_values(&[42.5], SeriesKind::Bar).summary();
    assert_eq!(summary.min_index, Some(0));
    assert_eq!(summary.max_index, Some(0));
    assert_eq!(summary.min_value, 42.5);
    assert_eq!(summary.max_value, 42.5);
    assert_eq!(summary.average_value, 42.5);
}

#[test]
fn summary_of_empty_series_is_nan_not_panic() {
    let summary = Series::default().summary();
    assert!(summary.average_value.is_nan());
    assert_eq!(summary.min_index, None);
    assert_eq!(summary.max_index, None);
}

#[test]
fn summary_handles_negative_values() {
    let summary = Series::from_values(&[-2.0, -8.0, 4.0], SeriesKind::Line).summary();
    assert_eq!(summary.min_index, Some(1));
    assert_eq!(summary.min_value, -8.0);
    assert_eq!(summary.max_index, Some(2));
    assert_eq!(summary.max_value, 4.0);
    assert_eq!(summary.average_value, -2.0);
}

#[test]
fn summary_is_recomputed_from_current_points() {
    let mut series = Series::from_values(&[1.0, 2.0], SeriesKind::Line);
    assert_eq!(series.summary().max_value, 2.0);
    series.points = points_from_values(&[1.0, 2.0, 9.0]);
    assert_eq!(series.summary().max_index, Some(2));
    assert_eq!(series.summary().max_value, 9.0);
}

#[test]
fn from_values_preserves_order_and_kind() {
    let series = Series::from_values(&[7.0, 8.0, 9.0], SeriesKind::Bar);
    assert_eq!(series.kind, SeriesKind::Bar);
    let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![7.0, 8.0, 9.0]);
    assert!(series.points.iter().all(|p| p.style.is_none()));
}

#[test]
fn pie_series_list_builds_one_series_per_value() {
    let list = pie_series_list(
        &[30.0, 20.0, 50.0],
        PieSeriesOption {
            radius: "35%".to_string(),
            names: vec!["a".to_string(), "b".to_string()],
            ..PieSeriesOption::default()
        },
    );

    assert_eq!(list.0.len(), 3);
    for (i, series) in list.0.iter().enumerate() {
        assert_eq!(series.kind, SeriesKind::Pie);
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.radius, "35%");
        assert_eq!(series.points[0].value, [30.0, 20.0, 50.0][i]);
    }
    // Missing names fall back to empty
    assert_eq!(list.names(), vec!["a", "b", ""]);
}

#[test]
fn series_list_names_keep_order() {
    let mut a = Series::from_values(&[1.0], SeriesKind::Line);
    a.name = "first".to_string();
    let mut b = Series::from_values(&[2.0], SeriesKind::Line);
    b.name = "second".to_string();
    let list = SeriesList(vec![a, b]);
    assert_eq!(list.names(), vec!["first", "second"]);
}

#[test]
fn summary_is_deterministic() {
    let series = Series::from_values(&[0.1, 0.2, 0.2, 0.1], SeriesKind::Line);
    assert_eq!(series.summary(), series.summary());
}
