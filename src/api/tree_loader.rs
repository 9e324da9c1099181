use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use tracing::{debug, warn};

use crate::core::{TreeNode, collapse_even_children};
use crate::error::ChartResult;

use super::{AssetFetcher, ChartOption, tree_demo_option};

/// Lazy stream yielding exactly one tree chart option, then ending.
pub type ChartOptionStream = BoxStream<'static, ChartResult<ChartOption>>;

/// Loads the hierarchical dataset and turns it into a tree chart option.
#[derive(Clone)]
pub struct TreeDataLoader {
    fetcher: Arc<dyn AssetFetcher>,
    path: String,
}

impl TreeDataLoader {
    #[must_use]
    pub fn new(fetcher: Arc<dyn AssetFetcher>, path: impl Into<String>) -> Self {
        Self {
            fetcher,
            path: path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a single-shot stream. Nothing is fetched until it is polled;
    /// each call starts an independent fetch.
    #[must_use]
    pub fn load(&self) -> ChartOptionStream {
        let fetcher = Arc::clone(&self.fetcher);
        let path = self.path.clone();
        stream::once(async move { fetch_tree_option(fetcher.as_ref(), &path).await }).boxed()
    }
}

/// Fetches `path`, collapses every even top-level child and wraps the root
/// into the tree chart template.
pub async fn fetch_tree_option(
    fetcher: &dyn AssetFetcher,
    path: &str,
) -> ChartResult<ChartOption> {
    let document = match fetcher.get_json(path).await {
        Ok(document) => document,
        Err(err) => {
            warn!(path, error = %err, "tree asset fetch failed");
            return Err(err);
        }
    };

    let mut root = TreeNode::from_json_value(document)?;
    let collapsed = collapse_even_children(&mut root);
    debug!(
        path,
        children = root.child_count(),
        collapsed,
        "tree dataset prepared"
    );
    Ok(tree_demo_option(root))
}
