use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{AnimationDelay, TreeNode};
use crate::error::{ChartError, ChartResult};

use super::ChartModule;

/// Declarative configuration for one chart instance.
///
/// Serializes to a camelCase document shaped like an ECharts option, with
/// unset fields omitted. `animationDelay` and `animationDelayUpdate` are
/// emitted as `{ stepMs, baseMs }` descriptors; renderer adapters turn each
/// [`AnimationDelay`] into a per-index callback before handing the option on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisOption>,
    #[serde(default)]
    pub series: Vec<SeriesOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_delay_update: Option<AnimationDelay>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleOption {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOption {
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipTrigger {
    Item,
    Axis,
    None,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TooltipTrigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_on: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisType {
    Category,
    Value,
    Time,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLineOption {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOption {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_line: Option<SplitLineOption>,
}

impl AxisOption {
    #[must_use]
    pub fn of_type(axis_type: AxisType) -> Self {
        Self {
            axis_type: Some(axis_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn category(labels: Vec<String>) -> Self {
        Self {
            data: Some(labels),
            ..Self::of_type(AxisType::Category)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Line,
    Bar,
    Tree,
}

impl SeriesKind {
    #[must_use]
    pub fn module(self) -> ChartModule {
        match self {
            Self::Line => ChartModule::LineChart,
            Self::Bar => ChartModule::BarChart,
            Self::Tree => ChartModule::TreeChart,
        }
    }
}

/// Series payload: flat values for cartesian charts, root nodes for trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<f64>),
    Tree(Vec<TreeNode>),
}

impl SeriesData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Tree(roots) => roots.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_values(&self) -> Option<&[f64]> {
        match self {
            Self::Values(values) => Some(values.as_slice()),
            Self::Tree(_) => None,
        }
    }

    #[must_use]
    pub fn as_tree(&self) -> Option<&[TreeNode]> {
        match self {
            Self::Tree(roots) => Some(roots.as_slice()),
            Self::Values(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeavesOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub data: SeriesData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_delay: Option<AnimationDelay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaves: Option<LeavesOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_and_collapse: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration_update: Option<u32>,
}

impl SeriesOption {
    #[must_use]
    pub fn new(kind: SeriesKind, data: SeriesData) -> Self {
        Self {
            name: None,
            kind,
            data,
            animation_delay: None,
            top: None,
            left: None,
            bottom: None,
            right: None,
            symbol_size: None,
            label: None,
            leaves: None,
            expand_and_collapse: None,
            animation_duration: None,
            animation_duration_update: None,
        }
    }

    #[must_use]
    pub fn values(kind: SeriesKind, values: Vec<f64>) -> Self {
        Self::new(kind, SeriesData::Values(values))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_animation_delay(mut self, delay: AnimationDelay) -> Self {
        self.animation_delay = Some(delay);
        self
    }
}

impl ChartOption {
    /// Modules a renderer must have registered to draw this option.
    #[must_use]
    pub fn required_modules(&self) -> Vec<ChartModule> {
        let mut modules = Vec::new();
        let mut push = |module: ChartModule| {
            if !modules.contains(&module) {
                modules.push(module);
            }
        };

        if self.title.is_some() {
            push(ChartModule::Title);
        }
        if self.legend.is_some() {
            push(ChartModule::Legend);
        }
        if self.tooltip.is_some() {
            push(ChartModule::Tooltip);
        }
        if self.x_axis.is_some() || self.y_axis.is_some() {
            push(ChartModule::Grid);
        }
        for series in &self.series {
            push(series.kind.module());
        }
        modules
    }

    /// Values of the first series, if it carries flat values.
    #[must_use]
    pub fn first_series_values(&self) -> Option<&[f64]> {
        self.series.first().and_then(|series| series.data.as_values())
    }

    pub fn to_json_value(&self) -> ChartResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart option: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart option: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart option: {e}")))
    }
}
