use serde::{Deserialize, Serialize};

/// Per-point animation timing rule handed to the rendering collaborator.
///
/// Serialized as a `{ stepMs, baseMs }` descriptor, which renderers do not
/// read directly: an adapter converts it with [`AnimationDelay::as_fn`] into
/// the `delay(idx) = idx * step_ms + base_ms` callback the renderer invokes
/// per data index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDelay {
    pub step_ms: f64,
    pub base_ms: f64,
}

impl AnimationDelay {
    #[must_use]
    pub const fn linear(step_ms: f64, base_ms: f64) -> Self {
        Self { step_ms, base_ms }
    }

    /// Delay in milliseconds for the point at `idx`.
    #[must_use]
    pub fn at(self, idx: usize) -> f64 {
        idx as f64 * self.step_ms + self.base_ms
    }

    #[must_use]
    pub fn as_fn(self) -> impl Fn(usize) -> f64 {
        move |idx| self.at(idx)
    }
}

/// Delay rule for the bar demo's series at position `series_index`.
///
/// Each series is offset by 100ms from the previous one, points within a
/// series step by 10ms.
#[must_use]
pub fn bar_series_delay(series_index: usize) -> AnimationDelay {
    AnimationDelay::linear(10.0, series_index as f64 * 100.0)
}

/// Chart-level delay applied when bar data is updated.
#[must_use]
pub fn bar_update_delay() -> AnimationDelay {
    AnimationDelay::linear(5.0, 0.0)
}
