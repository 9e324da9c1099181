use serde::{Deserialize, Serialize};

use crate::core::animation::{AnimationDelay, bar_series_delay};

/// Point count used by the bar demo.
pub const SYNTHETIC_POINT_COUNT: usize = 100;

/// Largest point count accepted from configuration.
pub const MAX_SYNTHETIC_POINT_COUNT: usize = 100_000;

/// Category axis plus two value series sharing the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSeries {
    pub categories: Vec<String>,
    pub primary: Vec<f64>,
    pub secondary: Vec<f64>,
}

impl SyntheticSeries {
    /// Generates `count` points of both trigonometric series.
    #[must_use]
    pub fn generate(count: usize) -> Self {
        let mut categories = Vec::with_capacity(count);
        let mut primary = Vec::with_capacity(count);
        let mut secondary = Vec::with_capacity(count);

        for i in 0..count {
            categories.push(category_label(i));
            primary.push(primary_value(i));
            secondary.push(secondary_value(i));
        }

        Self {
            categories,
            primary,
            secondary,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn primary_delay(&self) -> AnimationDelay {
        bar_series_delay(0)
    }

    #[must_use]
    pub fn secondary_delay(&self) -> AnimationDelay {
        bar_series_delay(1)
    }
}

impl Default for SyntheticSeries {
    fn default() -> Self {
        Self::generate(SYNTHETIC_POINT_COUNT)
    }
}

#[must_use]
pub fn category_label(index: usize) -> String {
    format!("category{index}")
}

/// `(sin(i/5) * (i/5 - 10) + i/6) * 5`
#[must_use]
pub fn primary_value(index: usize) -> f64 {
    let i = index as f64;
    ((i / 5.0).sin() * (i / 5.0 - 10.0) + i / 6.0) * 5.0
}

/// `(cos(i/5) * (i/5 - 10) + i/6) * 5`
#[must_use]
pub fn secondary_value(index: usize) -> f64 {
    let i = index as f64;
    ((i / 5.0).cos() * (i / 5.0 - 10.0) + i / 6.0) * 5.0
}
