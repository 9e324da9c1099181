use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::ChartOption;

/// Renderer module that must be installed before a chart using it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartModule {
    LineChart,
    BarChart,
    TreeChart,
    Title,
    Legend,
    Tooltip,
    Grid,
}

impl ChartModule {
    pub const DEFAULTS: [ChartModule; 7] = [
        ChartModule::LineChart,
        ChartModule::BarChart,
        ChartModule::TreeChart,
        ChartModule::Title,
        ChartModule::Legend,
        ChartModule::Tooltip,
        ChartModule::Grid,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LineChart => "LineChart",
            Self::BarChart => "BarChart",
            Self::TreeChart => "TreeChart",
            Self::Title => "TitleComponent",
            Self::Legend => "LegendComponent",
            Self::Tooltip => "TooltipComponent",
            Self::Grid => "GridComponent",
        }
    }
}

impl fmt::Display for ChartModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered set of installed renderer modules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartModuleRegistry {
    modules: Vec<ChartModule>,
}

impl ChartModuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every module the demo charts use.
    #[must_use]
    pub fn with_default_modules() -> Self {
        Self {
            modules: ChartModule::DEFAULTS.to_vec(),
        }
    }

    pub fn register(&mut self, module: ChartModule) -> ChartResult<()> {
        if self.modules.contains(&module) {
            return Err(ChartError::DuplicateModule(module.name().to_owned()));
        }
        self.modules.push(module);
        Ok(())
    }

    /// Registers all `modules`, stopping at the first duplicate.
    pub fn register_all(
        &mut self,
        modules: impl IntoIterator<Item = ChartModule>,
    ) -> ChartResult<()> {
        for module in modules {
            self.register(module)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn has_module(&self, module: ChartModule) -> bool {
        self.modules.contains(&module)
    }

    #[must_use]
    pub fn modules(&self) -> &[ChartModule] {
        &self.modules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Fails with the first module `option` needs that is not registered.
    pub fn ensure_supports(&self, option: &ChartOption) -> ChartResult<()> {
        match option
            .required_modules()
            .into_iter()
            .find(|module| !self.has_module(*module))
        {
            Some(missing) => Err(ChartError::ModuleNotRegistered(missing.name().to_owned())),
            None => Ok(()),
        }
    }
}

static GLOBAL_MODULES: OnceLock<ChartModuleRegistry> = OnceLock::new();

/// One-time process-wide module installation.
///
/// The first call installs the default module set; later calls return the
/// same registry.
pub fn init_chart_modules() -> &'static ChartModuleRegistry {
    GLOBAL_MODULES.get_or_init(|| {
        let registry = ChartModuleRegistry::with_default_modules();
        debug!(modules = registry.len(), "chart modules installed");
        registry
    })
}

/// Installed global registry, if `init_chart_modules` has run.
#[must_use]
pub fn chart_modules() -> Option<&'static ChartModuleRegistry> {
    GLOBAL_MODULES.get()
}
