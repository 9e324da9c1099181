use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// Node of a hierarchical dataset rendered by the tree chart.
///
/// `value` is kept as raw JSON since renderers accept numbers, strings and
/// arrays there. Other keys the chart does not interpret (custom styling,
/// ids) are kept in `extra`, so documents survive a load/serialize cycle
/// unchanged apart from `collapsed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TreeNode {
    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: None,
            collapsed: None,
            extra: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn branch(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            children: Some(children),
            ..Self::leaf(name)
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Parses a tree document. The root must be a JSON object; `children`,
    /// when present, must be an array of nodes.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse tree document: {e}")))
    }

    pub fn from_json_value(value: Value) -> ChartResult<Self> {
        if !value.is_object() {
            return Err(ChartError::InvalidData(
                "tree document root must be a json object".to_owned(),
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| ChartError::InvalidData(format!("failed to decode tree document: {e}")))
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed.unwrap_or(false)
    }
}

/// Marks every direct child of `root` at an even position as collapsed.
///
/// Odd positions, grandchildren and the root itself are left as they were.
/// Returns the number of children marked.
pub fn collapse_even_children(root: &mut TreeNode) -> usize {
    let Some(children) = root.children.as_mut() else {
        return 0;
    };

    let mut marked = 0;
    for child in children.iter_mut().step_by(2) {
        child.collapsed = Some(true);
        marked += 1;
    }
    marked
}
