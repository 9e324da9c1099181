use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to fetch asset `{path}`: {reason}")]
    AssetFetch { path: String, reason: String },

    #[error("data source request failed: {0}")]
    DataSource(String),

    #[error("chart module `{0}` is not registered")]
    ModuleNotRegistered(String),

    #[error("chart module `{0}` is already registered")]
    DuplicateModule(String),
}
