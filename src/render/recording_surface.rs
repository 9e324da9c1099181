use crate::api::{ChartOption, OptionPatch};
use crate::error::{ChartError, ChartResult};
use crate::render::ChartSurface;

/// Headless surface that keeps the live option in memory.
///
/// Merges are applied with the same index-based rule a browser renderer
/// uses, so tests can observe what would be on screen.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    current: Option<ChartOption>,
    pub set_count: usize,
    pub merge_count: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn current(&self) -> Option<&ChartOption> {
        self.current.as_ref()
    }
}

impl ChartSurface for RecordingSurface {
    fn set_option(&mut self, option: &ChartOption) -> ChartResult<()> {
        self.current = Some(option.clone());
        self.set_count += 1;
        Ok(())
    }

    fn merge_option(&mut self, patch: &OptionPatch) -> ChartResult<()> {
        let current = self.current.as_mut().ok_or_else(|| {
            ChartError::InvalidData("cannot merge before an option is set".to_owned())
        })?;
        current.merge(patch)?;
        self.merge_count += 1;
        Ok(())
    }
}
