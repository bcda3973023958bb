//! Runs a single search for the front end and packages the result.
//!
//! Covers loading the input, advising about the pruning gap for negative
//! values, running either search mode, and building the JSON document.

use serde::Serialize;
use std::io::Write;

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::{verbose_eprintln, verbose_println};
use crate::input;
use crate::search::{self, MemoOutcome, SearchOutcome};
use crate::tree::{ExplorationStep, RenderNode, SubsetResult, TreeFlattener};

/// Which search produced a result document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Tree,
    Optimized,
}

/// Document written by `--output`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDocument {
    pub numbers: Vec<i32>,
    pub target: i32,
    pub mode: SearchMode,
    pub subsets: Vec<SubsetResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<RenderNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<ExplorationStep>>,
}

/// Reads the number list and the target from the command line.
pub fn load_input(cli: &Cli) -> Result<(Vec<i32>, i32), AppError> {
    verbose_println!(cli.quiet, "\n[STEP 1] Loading input...");
    let numbers = match (&cli.numbers, &cli.file) {
        (Some(text), _) => input::parse_numbers(text, cli.max_numbers)?,
        (None, Some(path)) => {
            let path_str = file_handler::validate_input_file(path, cli.quiet)?;
            input::load_numbers_from_file(path_str, cli.max_numbers)?
        }
        (None, None) => return Err(input::InputError::EmptyNumbers.into()),
    };
    let target = input::parse_target(&cli.target)?;
    verbose_println!(
        cli.quiet,
        "   => {} number(s): {:?}, target {}",
        numbers.len(),
        numbers,
        target
    );
    Ok((numbers, target))
}

/// Warns when negative values make the over-target pruning incomplete.
/// Returns `true` if a warning was issued.
pub fn warn_about_pruning_gap(numbers: &[i32], quiet_mode: bool) -> bool {
    if !search::pruning_may_drop_matches(numbers) {
        return false;
    }
    let message = "input contains negative values; paths that exceed the target are pruned, \
                   so subsets reachable only after overshooting are not reported";
    verbose_eprintln!(quiet_mode, "[WARNING] {}", message);
    eprintln!("Warning: {}", message);
    true
}

/// Runs the tree-building search and logs its shape.
/// The step listing goes to `detail_log` when one is given.
pub fn run_tree_search(
    numbers: &[i32],
    target: i32,
    quiet_mode: bool,
    detail_log: Option<&mut dyn Write>,
) -> SearchOutcome {
    verbose_println!(quiet_mode, "[STEP 2] Exploring include/exclude tree...");
    let outcome = search::find_subsets(numbers, target);
    verbose_println!(
        quiet_mode,
        "   => {} node(s), {} leaf/leaves, {} match(es).",
        outcome.node_count(),
        outcome.leaf_count(),
        outcome.subsets.len()
    );

    if let Some(writer) = detail_log {
        verbose_println!(quiet_mode, "   => Logging exploration steps to tree_details.log...");
        if let Err(e) = TreeFlattener::print_steps_to_writer(Some(&outcome.tree), writer) {
            // Detail logging is not needed for the result itself.
            verbose_eprintln!(quiet_mode, "   [ERROR] Failed to write exploration steps: {}", e);
        }
    }
    outcome
}

/// Runs the memoized search and logs cache statistics.
pub fn run_memoized_search(numbers: &[i32], target: i32, quiet_mode: bool) -> MemoOutcome {
    verbose_println!(quiet_mode, "[STEP 2] Running memoized search...");
    let outcome = search::find_subsets_memoized(numbers, target);
    verbose_println!(
        quiet_mode,
        "   => {} state(s) evaluated, {} cache hit(s), {} match(es).",
        outcome.states_evaluated,
        outcome.cache_hits,
        outcome.subsets.len()
    );
    outcome
}

impl ResultDocument {
    pub fn from_tree_search(numbers: Vec<i32>, target: i32, outcome: SearchOutcome) -> Self {
        let steps = TreeFlattener::steps(Some(&outcome.tree));
        let tree = RenderNode::from_tree(Some(&outcome.tree));
        Self {
            numbers,
            target,
            mode: SearchMode::Tree,
            subsets: outcome.subsets,
            tree,
            steps: Some(steps),
        }
    }

    pub fn from_memoized_search(numbers: Vec<i32>, target: i32, outcome: MemoOutcome) -> Self {
        Self {
            numbers,
            target,
            mode: SearchMode::Optimized,
            subsets: outcome.subsets,
            tree: None,
            steps: None,
        }
    }
}

/// One line per subset, e.g. `{2, 3} = 5`.
pub fn format_subsets(subsets: &[SubsetResult]) -> String {
    subsets
        .iter()
        .map(|s| {
            let values = s
                .elements
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            format!("{{{}}} = {}", values, s.sum)
        })
        .collect::<Vec<String>>()
        .join("\n")
}
