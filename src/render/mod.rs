mod recording_surface;

pub use recording_surface::RecordingSurface;

use crate::api::{ChartOption, OptionPatch};
use crate::error::ChartResult;

/// Contract implemented by any chart rendering backend.
///
/// Backends receive complete options through `set_option` and partial
/// updates through `merge_option`; layout, drawing and animation stay on the
/// backend side.
pub trait ChartSurface {
    fn set_option(&mut self, option: &ChartOption) -> ChartResult<()>;

    fn merge_option(&mut self, patch: &OptionPatch) -> ChartResult<()>;
}
