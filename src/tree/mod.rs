// node module
mod node;
// render module
mod render;
// steps module
mod steps;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the tree modules.
//─────────────────────────────────────────────────────────────────────────────
pub use node::{Decision, ExplorationNode, ExplorationStep, NodeId, SubsetResult};
pub use render::{RenderAttributes, RenderNode};
pub use steps::TreeFlattener;
