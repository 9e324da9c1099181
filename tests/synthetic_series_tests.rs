use approx::assert_relative_eq;
use chart_showcase::api::{DemoConfig, SeriesKind, bar_demo_option};
use chart_showcase::core::{
    AnimationDelay, SYNTHETIC_POINT_COUNT, SyntheticSeries, bar_series_delay, bar_update_delay,
};

#[test]
fn default_generation_has_one_hundred_aligned_points() {
    let series = SyntheticSeries::default();
    assert_eq!(series.len(), SYNTHETIC_POINT_COUNT);
    assert_eq!(series.categories.len(), 100);
    assert_eq!(series.primary.len(), 100);
    assert_eq!(series.secondary.len(), 100);

    for (i, label) in series.categories.iter().enumerate() {
        assert_eq!(label, &format!("category{i}"));
    }
}

#[test]
fn first_point_differs_between_series() {
    let series = SyntheticSeries::default();
    assert_eq!(series.primary[0], 0.0);
    assert_eq!(series.secondary[0], -50.0);
}

#[test]
fn values_follow_closed_form_exactly() {
    let series = SyntheticSeries::default();
    for i in 0..SYNTHETIC_POINT_COUNT {
        let x = i as f64;
        let expected_primary = ((x / 5.0).sin() * (x / 5.0 - 10.0) + x / 6.0) * 5.0;
        let expected_secondary = ((x / 5.0).cos() * (x / 5.0 - 10.0) + x / 6.0) * 5.0;
        assert_eq!(series.primary[i], expected_primary);
        assert_eq!(series.secondary[i], expected_secondary);
    }
}

#[test]
fn known_midpoint_value() {
    let series = SyntheticSeries::default();
    // i = 50: sin(10) * 0 + 50/6, scaled by 5.
    assert_relative_eq!(series.primary[50], 50.0 / 6.0 * 5.0, epsilon = 1e-9);
    assert_relative_eq!(series.secondary[50], 50.0 / 6.0 * 5.0, epsilon = 1e-9);
}

#[test]
fn series_delays_are_offset_by_one_hundred() {
    let series = SyntheticSeries::default();
    let first = series.primary_delay();
    let second = series.secondary_delay();

    assert_eq!(first, bar_series_delay(0));
    assert_eq!(second, bar_series_delay(1));
    for idx in [0usize, 1, 7, 99, 1_000] {
        assert_eq!(first.at(idx), idx as f64 * 10.0);
        assert_eq!(second.at(idx), idx as f64 * 10.0 + 100.0);
    }

    let as_fn = second.as_fn();
    assert_eq!(as_fn(3), 130.0);
}

#[test]
fn update_delay_steps_by_five() {
    let delay = bar_update_delay();
    assert_eq!(delay, AnimationDelay::linear(5.0, 0.0));
    assert_eq!(delay.at(0), 0.0);
    assert_eq!(delay.at(20), 100.0);
}

#[test]
fn bar_demo_categories_match_series_lengths() {
    let option = bar_demo_option(&DemoConfig::default());
    let categories = option
        .x_axis
        .as_ref()
        .and_then(|axis| axis.data.as_ref())
        .expect("category axis data");

    assert_eq!(option.series.len(), 2);
    for series in &option.series {
        assert_eq!(series.kind, SeriesKind::Bar);
        assert_eq!(series.data.len(), categories.len());
    }
    assert_eq!(option.series[0].name.as_deref(), Some("bar"));
    assert_eq!(option.series[1].name.as_deref(), Some("bar2"));
    assert_eq!(option.series[0].animation_delay, Some(bar_series_delay(0)));
    assert_eq!(option.series[1].animation_delay, Some(bar_series_delay(1)));
    assert_eq!(option.animation_easing.as_deref(), Some("elasticOut"));
}

#[test]
fn bar_demo_honors_configured_point_count() {
    let option = bar_demo_option(&DemoConfig::default().with_synthetic_point_count(12));
    assert_eq!(option.series[0].data.len(), 12);
    assert_eq!(option.series[1].data.len(), 12);
    assert_eq!(
        option.x_axis.and_then(|axis| axis.data).map(|data| data.len()),
        Some(12)
    );
}
