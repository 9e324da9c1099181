use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{ChartOption, SeriesData};

/// Partial update for one series, matched to the live option by index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SeriesData>,
}

/// Partial option merged into a live chart without replacing unspecified
/// fields, e.g. `{ "series": [{ "data": [...] }] }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionPatch {
    #[serde(default)]
    pub series: Vec<SeriesPatch>,
}

impl OptionPatch {
    /// Patch replacing only `series[0].data` with `values`.
    #[must_use]
    pub fn first_series_values(values: Vec<f64>) -> Self {
        Self {
            series: vec![SeriesPatch {
                data: Some(SeriesData::Values(values)),
            }],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|series| series.data.is_none())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize option patch: {e}")))
    }
}

impl ChartOption {
    /// Applies `patch` in place. Series are matched by position; a patch
    /// entry past the end of the live series list is rejected before any
    /// field is modified.
    pub fn merge(&mut self, patch: &OptionPatch) -> ChartResult<()> {
        if patch.series.len() > self.series.len()
            && patch.series[self.series.len()..]
                .iter()
                .any(|series| series.data.is_some())
        {
            return Err(ChartError::InvalidData(format!(
                "patch targets {} series but option only has {}",
                patch.series.len(),
                self.series.len()
            )));
        }

        for (target, series_patch) in self.series.iter_mut().zip(&patch.series) {
            if let Some(data) = &series_patch.data {
                target.data = data.clone();
            }
        }
        Ok(())
    }
}
