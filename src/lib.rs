//! chart-showcase: demo chart options for ECharts-compatible renderers.
//!
//! The crate assembles a line, a bar and a tree chart configuration, loads
//! the tree's hierarchical dataset asynchronously and refreshes the line
//! chart from a pluggable data source. Drawing is left to the renderer
//! behind [`render::ChartSurface`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartOption, DemoConfig, DemoViewController};
pub use error::{ChartError, ChartResult};
