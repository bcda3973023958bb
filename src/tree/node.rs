// node.rs
// ──────────────────────────────────────────────────────────────────────────────
// Data model for the include/exclude exploration tree.  Every node is one
// search state; internal nodes carry exactly two ordered children
// (Include = 0, Exclude = 1), leaves carry none.  The tree is a plain owned
// structure: no parent links, no sharing, immutable once the search returns.
// ──────────────────────────────────────────────────────────────────────────────
use serde::{Serialize, Serializer};

/// Identifier of a node in the exploration tree, unique per search invocation.
pub type NodeId = usize;

/// Serializes a `NodeId` as the string `node-<n>`.
pub(crate) fn serialize_node_id<S: Serializer>(id: &NodeId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("node-{}", id))
}

/// One index-selection of the input whose values sum to the target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsetResult {
    /// Chosen values in visiting order.
    pub elements: Vec<i64>,
    pub sum: i64,
    pub is_valid: bool,
}

impl SubsetResult {
    /// A confirmed match. `sum` is taken as given; callers only build these
    /// when the running sum equals the target.
    pub fn matched(elements: Vec<i64>, sum: i64) -> Self {
        Self {
            elements,
            sum,
            is_valid: true,
        }
    }
}

/// One state of the binary include/exclude search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationNode {
    #[serde(serialize_with = "serialize_node_id")]
    pub id: NodeId,
    /// "Root", "Include <v>" or "Exclude <v>".
    pub name: String,
    pub current_sum: i64,
    pub current_subset: Vec<i64>,
    pub children: Vec<ExplorationNode>,
    pub selected: bool,
    pub considered: bool,
    pub level: usize,
    /// Input index this decision concerned, -1 for the root.
    pub index_considered: isize,
    pub is_target: bool,
}

/// A child-free copy of an `ExplorationNode`, used for ordered playback.
pub type ExplorationStep = ExplorationNode;

/// Which way a decision went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Include, // first child (0)
    Exclude, // second child (1)
}

impl ExplorationNode {
    /// Creates the root state: empty subset, zero sum, level 0.
    pub fn root(id: NodeId) -> Self {
        Self {
            id,
            name: "Root".to_string(),
            current_sum: 0,
            current_subset: Vec::new(),
            children: Vec::new(),
            selected: false,
            considered: true,
            level: 0,
            index_considered: -1,
            is_target: false,
        }
    }

    /// Creates the child reached from `self` by deciding on `value` at `index`.
    pub fn decide(&self, id: NodeId, decision: Decision, index: usize, value: i64) -> Self {
        let (name, current_sum, current_subset) = match decision {
            Decision::Include => {
                let mut subset = Vec::with_capacity(self.current_subset.len() + 1);
                subset.extend_from_slice(&self.current_subset);
                subset.push(value);
                (
                    format!("Include {}", value),
                    self.current_sum + value,
                    subset,
                )
            }
            Decision::Exclude => (
                format!("Exclude {}", value),
                self.current_sum,
                self.current_subset.clone(),
            ),
        };
        Self {
            id,
            name,
            current_sum,
            current_subset,
            children: Vec::new(),
            selected: decision == Decision::Include,
            considered: true,
            level: self.level + 1,
            index_considered: index as isize,
            is_target: false,
        }
    }

    /// Copy of this node with `children` cleared.
    pub fn to_step(&self) -> ExplorationStep {
        Self {
            id: self.id,
            name: self.name.clone(),
            current_sum: self.current_sum,
            current_subset: self.current_subset.clone(),
            children: Vec::new(),
            selected: self.selected,
            considered: self.considered,
            level: self.level,
            index_considered: self.index_considered,
            is_target: self.is_target,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, `self` included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                count += 1;
            }
            stack.extend(node.children.iter());
        }
        count
    }

    /// Values of `current_subset` joined with `", "`.
    pub fn subset_label(&self) -> String {
        self.current_subset
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    }
}
