mod asset_fetcher;
mod chart_option;
mod data_source;
mod demo_config;
mod demo_options;
mod module_registry;
mod option_patch;
mod tree_loader;
mod view_controller;

#[cfg(feature = "http")]
pub use asset_fetcher::HttpAssetFetcher;
pub use asset_fetcher::{AssetFetcher, FsAssetFetcher};
pub use chart_option::{
    AxisOption, AxisType, ChartOption, LabelOption, LeavesOption, LegendOption, SeriesData,
    SeriesKind, SeriesOption, SplitLineOption, TitleOption, TooltipOption, TooltipTrigger,
};
pub use data_source::{DataSource, MockDataSource};
pub use demo_config::{DEFAULT_TREE_ASSET_PATH, DemoConfig};
pub use demo_options::{
    TREE_ANIMATION_DURATION_MS, TREE_ANIMATION_DURATION_UPDATE_MS, bar_demo_option,
    bar_option_from_series, line_demo_option, tree_demo_option,
};
pub use module_registry::{ChartModule, ChartModuleRegistry, chart_modules, init_chart_modules};
pub use option_patch::{OptionPatch, SeriesPatch};
pub use tree_loader::{ChartOptionStream, TreeDataLoader, fetch_tree_option};
pub use view_controller::DemoViewController;
