use crate::core::{SyntheticSeries, TreeNode, bar_update_delay};

use super::{
    AxisOption, AxisType, ChartOption, DemoConfig, LabelOption, LeavesOption, LegendOption,
    SeriesData, SeriesKind, SeriesOption, SplitLineOption, TooltipOption, TooltipTrigger,
};

/// Initial animation length of the tree chart in milliseconds.
pub const TREE_ANIMATION_DURATION_MS: u32 = 550;
/// Animation length of tree expand/collapse updates in milliseconds.
pub const TREE_ANIMATION_DURATION_UPDATE_MS: u32 = 750;

/// Weekly line chart, the target of data refreshes.
#[must_use]
pub fn line_demo_option(config: &DemoConfig) -> ChartOption {
    ChartOption {
        x_axis: Some(AxisOption::category(config.line_categories.clone())),
        y_axis: Some(AxisOption::of_type(AxisType::Value)),
        series: vec![SeriesOption::values(
            SeriesKind::Line,
            config.line_values.clone(),
        )],
        ..ChartOption::default()
    }
}

/// Two-series animated bar chart over synthetic data.
#[must_use]
pub fn bar_demo_option(config: &DemoConfig) -> ChartOption {
    bar_option_from_series(
        SyntheticSeries::generate(config.synthetic_point_count),
        &config.bar_series_names,
        &config.bar_animation_easing,
    )
}

#[must_use]
pub fn bar_option_from_series(
    series: SyntheticSeries,
    names: &[String; 2],
    easing: &str,
) -> ChartOption {
    let primary_delay = series.primary_delay();
    let secondary_delay = series.secondary_delay();
    let SyntheticSeries {
        categories,
        primary,
        secondary,
    } = series;

    ChartOption {
        legend: Some(LegendOption {
            data: names.to_vec(),
            align: Some("left".to_owned()),
        }),
        tooltip: Some(TooltipOption::default()),
        x_axis: Some(AxisOption {
            data: Some(categories),
            silent: Some(false),
            split_line: Some(SplitLineOption { show: false }),
            ..AxisOption::default()
        }),
        y_axis: Some(AxisOption::default()),
        series: vec![
            SeriesOption::values(SeriesKind::Bar, primary)
                .with_name(names[0].clone())
                .with_animation_delay(primary_delay),
            SeriesOption::values(SeriesKind::Bar, secondary)
                .with_name(names[1].clone())
                .with_animation_delay(secondary_delay),
        ],
        animation_easing: Some(easing.to_owned()),
        animation_delay_update: Some(bar_update_delay()),
        ..ChartOption::default()
    }
}

/// Wraps `root` as the single root of the collapsible tree chart template.
#[must_use]
pub fn tree_demo_option(root: TreeNode) -> ChartOption {
    let mut series = SeriesOption::new(SeriesKind::Tree, SeriesData::Tree(vec![root]));
    series.top = Some("1%".to_owned());
    series.left = Some("7%".to_owned());
    series.bottom = Some("1%".to_owned());
    series.right = Some("20%".to_owned());
    series.symbol_size = Some(7.0);
    series.label = Some(LabelOption {
        position: Some("left".to_owned()),
        vertical_align: Some("middle".to_owned()),
        align: Some("right".to_owned()),
        font_size: Some(9),
    });
    series.leaves = Some(LeavesOption {
        label: Some(LabelOption {
            position: Some("right".to_owned()),
            vertical_align: Some("middle".to_owned()),
            align: Some("left".to_owned()),
            font_size: None,
        }),
    });
    series.expand_and_collapse = Some(true);
    series.animation_duration = Some(TREE_ANIMATION_DURATION_MS);
    series.animation_duration_update = Some(TREE_ANIMATION_DURATION_UPDATE_MS);

    ChartOption {
        tooltip: Some(TooltipOption {
            trigger: Some(TooltipTrigger::Item),
            trigger_on: Some("mousemove".to_owned()),
        }),
        series: vec![series],
        ..ChartOption::default()
    }
}
