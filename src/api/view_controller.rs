use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::core::TreeNode;
use crate::error::ChartResult;
use crate::render::ChartSurface;

use super::{
    AssetFetcher, ChartModuleRegistry, ChartOption, ChartOptionStream, DataSource, DemoConfig,
    OptionPatch, TreeDataLoader, bar_demo_option, line_demo_option, tree_demo_option,
};

struct ViewState {
    line: ChartOption,
    bar: ChartOption,
    merge_option: Option<OptionPatch>,
}

/// Owns the demo chart options and the loading flag.
///
/// State is only touched between awaits, so the lock is never held while a
/// request is in flight. Overlapping refreshes are allowed; whichever
/// resolves last decides the final data and loading flag.
pub struct DemoViewController {
    source: Arc<dyn DataSource>,
    tree_loader: TreeDataLoader,
    state: Mutex<ViewState>,
    loading: watch::Sender<bool>,
}

impl DemoViewController {
    /// Builds the line and bar options from `config` and checks that every
    /// module the demo charts need is installed in `registry`.
    pub fn new(
        registry: &ChartModuleRegistry,
        config: &DemoConfig,
        source: Arc<dyn DataSource>,
        fetcher: Arc<dyn AssetFetcher>,
    ) -> ChartResult<Self> {
        config.validate()?;

        let line = line_demo_option(config);
        let bar = bar_demo_option(config);
        registry.ensure_supports(&line)?;
        registry.ensure_supports(&bar)?;
        registry.ensure_supports(&tree_demo_option(TreeNode::leaf(String::new())))?;

        let (loading, _) = watch::channel(false);
        Ok(Self {
            source,
            tree_loader: TreeDataLoader::new(fetcher, config.tree_asset_path.clone()),
            state: Mutex::new(ViewState {
                line,
                bar,
                merge_option: None,
            }),
            loading,
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn line_option(&self) -> ChartOption {
        self.lock_state().line.clone()
    }

    #[must_use]
    pub fn bar_option(&self) -> ChartOption {
        self.lock_state().bar.clone()
    }

    /// Last patch produced by a successful refresh.
    #[must_use]
    pub fn merge_option(&self) -> Option<OptionPatch> {
        self.lock_state().merge_option.clone()
    }

    /// Fresh single-shot stream for the tree chart.
    #[must_use]
    pub fn tree_options(&self) -> ChartOptionStream {
        self.tree_loader.load()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    #[must_use]
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Requests new values and patches `series[0].data` of the line chart.
    ///
    /// The loading flag is raised for the duration of the request and
    /// cleared on both success and failure. On failure the options are left
    /// untouched and the error is returned.
    pub async fn refresh(&self) -> ChartResult<()> {
        self.loading.send_replace(true);
        let outcome = self.fetch_and_merge().await;
        self.loading.send_replace(false);

        if let Err(err) = &outcome {
            warn!(error = %err, "refresh failed");
        }
        outcome
    }

    async fn fetch_and_merge(&self) -> ChartResult<()> {
        let values = self.source.get_data().await?;
        let points = values.len();
        let patch = OptionPatch::first_series_values(values);

        let mut state = self.lock_state();
        state.line.merge(&patch)?;
        state.merge_option = Some(patch);
        debug!(points, "line series refreshed");
        Ok(())
    }

    pub fn publish_line(&self, surface: &mut impl ChartSurface) -> ChartResult<()> {
        surface.set_option(&self.line_option())
    }

    pub fn publish_bar(&self, surface: &mut impl ChartSurface) -> ChartResult<()> {
        surface.set_option(&self.bar_option())
    }

    /// Forwards the pending merge option, if any. Returns `true` when a
    /// patch was sent.
    pub fn publish_patch(&self, surface: &mut impl ChartSurface) -> ChartResult<bool> {
        match self.merge_option() {
            Some(patch) => {
                surface.merge_option(&patch)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
