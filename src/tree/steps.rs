use std::io::Write;

use super::node::{ExplorationNode, ExplorationStep};

/// `TreeFlattener` turns an exploration tree into an ordered playback sequence.
pub struct TreeFlattener;

impl TreeFlattener {
    /// Returns every node of the tree as a child-free step, in pre-order
    /// (node before children, Include child before Exclude child).
    ///
    /// The order matches node-id order. `None` yields an empty sequence.
    pub fn steps(root: Option<&ExplorationNode>) -> Vec<ExplorationStep> {
        let Some(root) = root else {
            return Vec::new();
        };
        let mut steps = Vec::with_capacity(root.node_count());
        Self::traverse(root, &mut steps);
        steps
    }

    /// Depth-first, pre-order walk using an explicit stack.
    fn traverse(root: &ExplorationNode, steps: &mut Vec<ExplorationStep>) {
        let mut stack: Vec<&ExplorationNode> = vec![root];
        while let Some(node) = stack.pop() {
            steps.push(node.to_step());
            // Push in reverse so the Include child is popped first.
            for child in node.children.iter().rev() {
                stack.push(child);
            }
        }
    }

    /// Writes the step sequence as an indented text listing.
    pub fn print_steps_to_writer(
        root: Option<&ExplorationNode>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let steps = Self::steps(root);
        writeln!(writer, "=== EXPLORATION STEPS ===")?;
        if steps.is_empty() {
            writeln!(writer, "No exploration tree.")?;
            return Ok(());
        }
        let matches = steps.iter().filter(|s| s.is_target).count();
        writeln!(writer, "Total nodes: {}, matching nodes: {}", steps.len(), matches)?;
        writeln!(writer)?;

        for step in &steps {
            writeln!(
                writer,
                "{:indent$}node-{} {} sum={} subset=[{}]{}",
                "",
                step.id,
                step.name,
                step.current_sum,
                step.subset_label(),
                if step.is_target { " <= target" } else { "" },
                indent = step.level * 2
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::find_subsets;

    #[test]
    fn none_yields_empty_sequence() {
        assert!(TreeFlattener::steps(None).is_empty());
    }

    #[test]
    fn steps_follow_id_order_and_drop_children() {
        let outcome = find_subsets(&[2, 3, 5], 5);
        let steps = TreeFlattener::steps(Some(&outcome.tree));
        assert_eq!(steps.len(), outcome.tree.node_count());
        for (expected, step) in steps.iter().enumerate() {
            assert_eq!(step.id, expected);
            assert!(step.children.is_empty());
        }
        assert_eq!(steps[0].name, "Root");
        assert_eq!(steps[1].name, "Include 2");
        assert_eq!(steps[2].name, "Include 3");
    }

    #[test]
    fn flattening_is_repeatable() {
        let outcome = find_subsets(&[1, 2, 3, 4], 6);
        let first = TreeFlattener::steps(Some(&outcome.tree));
        let second = TreeFlattener::steps(Some(&outcome.tree));
        assert_eq!(first, second);
    }

    #[test]
    fn listing_marks_matches() {
        let outcome = find_subsets(&[4], 4);
        let mut out = Vec::new();
        TreeFlattener::print_steps_to_writer(Some(&outcome.tree), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total nodes: 3, matching nodes: 1"));
        assert!(text.contains("  node-1 Include 4 sum=4 subset=[4] <= target"));
        assert!(text.contains("  node-2 Exclude 4 sum=0 subset=[]\n"));
    }
}
