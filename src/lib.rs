//! Enumerates every subset of a small integer list that sums to a target,
//! recording the include/exclude decision tree for step-by-step replay.
//!
//! ```
//! use subset_sum_explorer::search::find_subsets;
//! use subset_sum_explorer::tree::TreeFlattener;
//!
//! let outcome = find_subsets(&[2, 3, 5], 5);
//! assert_eq!(outcome.subsets.len(), 2);
//! let steps = TreeFlattener::steps(Some(&outcome.tree));
//! assert_eq!(steps[0].name, "Root");
//! ```

pub mod app;
pub mod input;
pub mod search;
pub mod tree;
