pub mod animation;
pub mod synthetic;
pub mod tree;

pub use animation::{AnimationDelay, bar_series_delay, bar_update_delay};
pub use synthetic::{MAX_SYNTHETIC_POINT_COUNT, SYNTHETIC_POINT_COUNT, SyntheticSeries};
pub use tree::{TreeNode, collapse_even_children};
