use serde::{Deserialize, Serialize};

use crate::core::{MAX_SYNTHETIC_POINT_COUNT, SYNTHETIC_POINT_COUNT};
use crate::error::{ChartError, ChartResult};

/// Default location of the hierarchical dataset for the tree demo.
pub const DEFAULT_TREE_ASSET_PATH: &str = "assets/data/flare.json";

/// Settings for the demo charts.
///
/// Serializable so hosts can keep the setup in a JSON file; every field has
/// a default, so partial documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_tree_asset_path")]
    pub tree_asset_path: String,
    #[serde(default = "default_synthetic_point_count")]
    pub synthetic_point_count: usize,
    #[serde(default = "default_line_categories")]
    pub line_categories: Vec<String>,
    #[serde(default = "default_line_values")]
    pub line_values: Vec<f64>,
    #[serde(default = "default_bar_series_names")]
    pub bar_series_names: [String; 2],
    #[serde(default = "default_bar_animation_easing")]
    pub bar_animation_easing: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tree_asset_path: default_tree_asset_path(),
            synthetic_point_count: default_synthetic_point_count(),
            line_categories: default_line_categories(),
            line_values: default_line_values(),
            bar_series_names: default_bar_series_names(),
            bar_animation_easing: default_bar_animation_easing(),
        }
    }
}

impl DemoConfig {
    #[must_use]
    pub fn with_tree_asset_path(mut self, path: impl Into<String>) -> Self {
        self.tree_asset_path = path.into();
        self
    }

    #[must_use]
    pub fn with_synthetic_point_count(mut self, count: usize) -> Self {
        self.synthetic_point_count = count;
        self
    }

    /// Replaces the line demo's categories and values together.
    #[must_use]
    pub fn with_line_data(mut self, categories: Vec<String>, values: Vec<f64>) -> Self {
        self.line_categories = categories;
        self.line_values = values;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.tree_asset_path.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "tree asset path must not be empty".to_owned(),
            ));
        }
        if self.synthetic_point_count > MAX_SYNTHETIC_POINT_COUNT {
            return Err(ChartError::InvalidData(format!(
                "synthetic point count {} exceeds limit {MAX_SYNTHETIC_POINT_COUNT}",
                self.synthetic_point_count
            )));
        }
        if self.line_categories.len() != self.line_values.len() {
            return Err(ChartError::InvalidData(format!(
                "line demo has {} categories but {} values",
                self.line_categories.len(),
                self.line_values.len()
            )));
        }
        if self.line_values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "line demo values must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse demo config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize demo config: {e}")))
    }
}

fn default_tree_asset_path() -> String {
    DEFAULT_TREE_ASSET_PATH.to_owned()
}

fn default_synthetic_point_count() -> usize {
    SYNTHETIC_POINT_COUNT
}

fn default_line_categories() -> Vec<String> {
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn default_line_values() -> Vec<f64> {
    vec![820.0, 932.0, 901.0, 934.0, 1290.0, 1330.0, 1320.0]
}

fn default_bar_series_names() -> [String; 2] {
    ["bar".to_owned(), "bar2".to_owned()]
}

fn default_bar_animation_easing() -> String {
    "elasticOut".to_owned()
}
