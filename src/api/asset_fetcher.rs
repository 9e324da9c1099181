use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Reads static JSON resources addressed by a relative path.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn get_json(&self, path: &str) -> ChartResult<Value>;
}

/// Resolves asset paths against a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsAssetFetcher {
    root: PathBuf,
}

impl FsAssetFetcher {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[async_trait]
impl AssetFetcher for FsAssetFetcher {
    async fn get_json(&self, path: &str) -> ChartResult<Value> {
        let full_path = self.resolve(path);
        debug!(path = %full_path.display(), "reading json asset");

        let bytes = tokio::fs::read(&full_path)
            .await
            .map_err(|e| ChartError::AssetFetch {
                path: path.to_owned(),
                reason: e.to_string(),
            })?;
        serde_json::from_slice(&bytes).map_err(|e| ChartError::AssetFetch {
            path: path.to_owned(),
            reason: format!("body is not valid json: {e}"),
        })
    }
}

/// Fetches assets relative to a base URL.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpAssetFetcher {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "http")]
impl HttpAssetFetcher {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    async fn get_json(&self, path: &str) -> ChartResult<Value> {
        let url = self.url_for(path);
        debug!(%url, "requesting json asset");

        let fetch_err = |reason: String| ChartError::AssetFetch {
            path: path.to_owned(),
            reason,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?
            .error_for_status()
            .map_err(|e| fetch_err(e.to_string()))?;
        response
            .json::<Value>()
            .await
            .map_err(|e| fetch_err(format!("body is not valid json: {e}")))
    }
}
