use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire encoding for "every node expanded"
const EXPAND_ALL: &str = "*";

/// Which nodes the DAG view should draw expanded.
///
/// Serialized as a plain list of node identifiers, where the single entry
/// `"*"` stands for [`ExpandedNodes::All`]. Any incoming list that contains
/// `"*"` parses as `All`, whatever else it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandedNodes {
    /// Every node expanded, regardless of identifier
    All,
    /// Exactly the listed identifiers expanded; empty means fully collapsed
    Nodes(IndexSet<String>),
}

impl ExpandedNodes {
    pub fn all() -> Self {
        ExpandedNodes::All
    }

    pub fn none() -> Self {
        ExpandedNodes::Nodes(IndexSet::new())
    }

    /// Whether the DAG view should draw this node expanded
    pub fn is_expanded(&self, node_id: &str) -> bool {
        match self {
            ExpandedNodes::All => true,
            ExpandedNodes::Nodes(ids) => ids.contains(node_id),
        }
    }

    /// Same value plus one more expanded node. `All` already covers every
    /// node, so it stays `All`.
    pub fn with_node(&self, node_id: &str) -> Self {
        match self {
            ExpandedNodes::All => ExpandedNodes::All,
            ExpandedNodes::Nodes(ids) => {
                let mut ids = ids.clone();
                ids.insert(String::from(node_id));
                ExpandedNodes::Nodes(ids)
            }
        }
    }
}

impl Default for ExpandedNodes {
    fn default() -> Self {
        ExpandedNodes::none()
    }
}

impl<S: Into<String>> FromIterator<S> for ExpandedNodes {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let ids: IndexSet<String> = iter.into_iter().map(Into::into).collect();
        if ids.contains(EXPAND_ALL) {
            ExpandedNodes::All
        } else {
            ExpandedNodes::Nodes(ids)
        }
    }
}

impl Serialize for ExpandedNodes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExpandedNodes::All => serializer.collect_seq([EXPAND_ALL]),
            ExpandedNodes::Nodes(ids) => serializer.collect_seq(ids),
        }
    }
}

impl<'de> Deserialize<'de> for ExpandedNodes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<String>::deserialize(deserializer)?;
        // The sentinel supersedes any explicit ids sent alongside it
        Ok(ids.into_iter().collect())
    }
}

/// Display configuration for the workflow DAG view.
///
/// The value is owned by the embedding view; the options panel only reads it
/// and proposes replacements via its change callback. Every transition below
/// returns a new value with exactly one field replaced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Whether artifact nodes are included in the rendered graph
    pub show_artifacts: bool,
    pub expand_nodes: ExpandedNodes,
    /// Whether nodes are clustered by the template they reference
    pub show_template_refs_grouping: bool,
    /// Whether each node is annotated with its invoking template's name
    pub show_invoking_template_name: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            show_artifacts: true,
            expand_nodes: ExpandedNodes::none(),
            show_template_refs_grouping: false,
            show_invoking_template_name: false,
        }
    }
}

impl RenderOptions {
    pub fn toggle_artifacts(&self) -> Self {
        RenderOptions {
            show_artifacts: !self.show_artifacts,
            ..self.clone()
        }
    }

    pub fn collapse_all(&self) -> Self {
        RenderOptions {
            expand_nodes: ExpandedNodes::none(),
            ..self.clone()
        }
    }

    pub fn expand_all(&self) -> Self {
        RenderOptions {
            expand_nodes: ExpandedNodes::all(),
            ..self.clone()
        }
    }

    pub fn toggle_template_refs_grouping(&self) -> Self {
        RenderOptions {
            show_template_refs_grouping: !self.show_template_refs_grouping,
            ..self.clone()
        }
    }

    pub fn toggle_invoking_template_name(&self) -> Self {
        RenderOptions {
            show_invoking_template_name: !self.show_invoking_template_name,
            ..self.clone()
        }
    }

    /// Expand a single node in addition to whatever is already expanded
    pub fn expand_node(&self, node_id: &str) -> Self {
        RenderOptions {
            expand_nodes: self.expand_nodes.with_node(node_id),
            ..self.clone()
        }
    }
}
