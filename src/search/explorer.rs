use serde::Serialize;

use crate::tree::{Decision, ExplorationNode, NodeId, SubsetResult};

/// Result of a tree-building search: every match plus the full decision tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub subsets: Vec<SubsetResult>,
    pub tree: ExplorationNode,
}

impl SearchOutcome {
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }
}

/// Runs the include/exclude backtracking search and records every decision.
///
/// Duplicate values at different positions are distinct decisions. A path
/// stops as soon as its running sum equals `target`, when the input is
/// exhausted, or when the running sum exceeds `target`.
///
/// The last rule is only sound for non-negative inputs; with negative values
/// some matches reachable after overshooting the target are not reported.
/// See [`pruning_may_drop_matches`].
///
/// Inputs are 32-bit and running sums are kept in `i64`, so no path can
/// overflow for any input the tree could hold in memory.
pub fn find_subsets(numbers: &[i32], target: i32) -> SearchOutcome {
    SubsetExplorer::new(numbers, target).run()
}

/// Per-invocation search state. Owns the id counter so that separate
/// searches never share numbering.
struct SubsetExplorer<'a> {
    numbers: &'a [i32],
    target: i64,
    next_id: NodeId,
    found: Vec<SubsetResult>,
}

impl<'a> SubsetExplorer<'a> {
    fn new(numbers: &'a [i32], target: i32) -> Self {
        Self {
            numbers,
            target: i64::from(target),
            next_id: 0,
            found: Vec::new(),
        }
    }

    /// Hands out the next id. Ids are assigned before any child is created,
    /// which makes them a pre-order numbering.
    fn allocate_id(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn run(mut self) -> SearchOutcome {
        let root_id = self.allocate_id();
        let mut root = ExplorationNode::root(root_id);
        self.backtrack(0, &mut root);
        SearchOutcome {
            subsets: self.found,
            tree: root,
        }
    }

    fn backtrack(&mut self, index: usize, node: &mut ExplorationNode) {
        if node.current_sum == self.target {
            self.found.push(SubsetResult::matched(
                node.current_subset.clone(),
                node.current_sum,
            ));
            node.is_target = true;
            return;
        }

        if index >= self.numbers.len() || node.current_sum > self.target {
            return;
        }

        let value = i64::from(self.numbers[index]);

        let include_id = self.allocate_id();
        let mut include = node.decide(include_id, Decision::Include, index, value);
        self.backtrack(index + 1, &mut include);
        node.children.push(include);

        let exclude_id = self.allocate_id();
        let mut exclude = node.decide(exclude_id, Decision::Exclude, index, value);
        self.backtrack(index + 1, &mut exclude);
        node.children.push(exclude);
    }
}

/// Returns `true` when the over-target pruning rule can hide matches for
/// this input, i.e. when any value is negative.
pub fn pruning_may_drop_matches(numbers: &[i32]) -> bool {
    numbers.iter().any(|&v| v < 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements(outcome: &SearchOutcome) -> Vec<Vec<i64>> {
        outcome.subsets.iter().map(|s| s.elements.clone()).collect()
    }

    #[test]
    fn finds_both_subsets_of_two_three_five() {
        let outcome = find_subsets(&[2, 3, 5], 5);
        assert_eq!(elements(&outcome), vec![vec![2, 3], vec![5]]);
        assert!(outcome.subsets.iter().all(|s| s.sum == 5 && s.is_valid));
        assert_eq!(outcome.tree.children.len(), 2);
        assert_eq!(outcome.tree.children[0].name, "Include 2");
        assert_eq!(outcome.tree.children[1].name, "Exclude 2");
    }

    #[test]
    fn empty_input_with_zero_target_matches_at_root() {
        let outcome = find_subsets(&[], 0);
        assert_eq!(outcome.subsets, vec![SubsetResult::matched(vec![], 0)]);
        assert!(outcome.tree.is_target);
        assert!(outcome.tree.is_leaf());
        assert_eq!(outcome.node_count(), 1);
    }

    #[test]
    fn empty_input_with_nonzero_target_is_a_lone_root() {
        let outcome = find_subsets(&[], 3);
        assert!(outcome.subsets.is_empty());
        assert!(!outcome.tree.is_target);
        assert!(outcome.tree.is_leaf());
    }

    #[test]
    fn repeated_values_are_distinct_positions() {
        let outcome = find_subsets(&[1, 1], 2);
        assert_eq!(elements(&outcome), vec![vec![1, 1]]);
    }

    #[test]
    fn unreachable_target_leaves_two_exhausted_leaves() {
        let outcome = find_subsets(&[4], 10);
        assert!(outcome.subsets.is_empty());
        let children = &outcome.tree.children;
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name, "Include 4");
        assert_eq!(children[0].current_sum, 4);
        assert!(children[0].is_leaf());
        assert_eq!(children[1].name, "Exclude 4");
        assert_eq!(children[1].current_sum, 0);
        assert!(children[1].is_leaf());
        assert_eq!(outcome.leaf_count(), 2);
    }

    #[test]
    fn ids_restart_for_every_invocation() {
        let first = find_subsets(&[1, 2, 3], 3);
        let second = find_subsets(&[1, 2, 3], 3);
        assert_eq!(first.tree.id, 0);
        assert_eq!(second.tree.id, 0);
        assert_eq!(first, second);
    }

    #[test]
    fn over_target_paths_are_pruned() {
        let outcome = find_subsets(&[7, 1], 3);
        // Include 7 overshoots and gets no children.
        assert!(outcome.tree.children[0].is_leaf());
        assert_eq!(outcome.tree.children[0].current_sum, 7);
    }

    #[test]
    fn negative_values_can_be_missed_after_overshoot() {
        // 5 + -2 = 3 is a valid selection, but the path overshoots at 5 first.
        let outcome = find_subsets(&[5, -2], 3);
        assert!(outcome.subsets.is_empty());
        assert!(pruning_may_drop_matches(&[5, -2]));
        assert!(!pruning_may_drop_matches(&[5, 2]));
    }

    #[test]
    fn matches_stop_descent() {
        let outcome = find_subsets(&[3, 0], 3);
        // Include 3 matches and is not expanded further.
        let include = &outcome.tree.children[0];
        assert!(include.is_target);
        assert!(include.is_leaf());
        assert_eq!(elements(&outcome), vec![vec![3]]);
    }

    #[test]
    fn extreme_values_do_not_overflow_running_sums() {
        let outcome = find_subsets(&[-1, i32::MIN, 5], 5);
        assert_eq!(elements(&outcome), vec![vec![5]]);
        let deepest = &outcome.tree.children[0].children[0];
        assert_eq!(deepest.name, format!("Include {}", i32::MIN));
        assert_eq!(deepest.current_sum, i64::from(i32::MIN) - 1);
        assert!(!deepest.is_target);
    }
}
