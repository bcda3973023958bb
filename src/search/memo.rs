use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;

use crate::tree::SubsetResult;

/// Result of the memoized search. No exploration tree is recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoOutcome {
    pub subsets: Vec<SubsetResult>,
    /// Distinct `(index, running_sum)` states actually computed.
    pub states_evaluated: usize,
    /// Visits answered from the cache.
    pub cache_hits: usize,
}

/// Finds the same subsets as [`super::find_subsets`] without building a tree.
///
/// Sub-searches are cached by `(index, running_sum)`. The cache stores the
/// element suffixes chosen from `index` onwards, and each return prepends
/// the value it included, so a cached entry is valid for every path that
/// reaches the same key. Running sums are widened to `i64` as in the tree search.
pub fn find_subsets_memoized(numbers: &[i32], target: i32) -> MemoOutcome {
    let target = i64::from(target);
    let mut search = MemoSearch {
        numbers,
        target,
        cache: HashMap::new(),
        cache_hits: 0,
    };
    let suffixes = search.suffixes(0, 0);
    let subsets = suffixes
        .iter()
        .map(|elements| SubsetResult::matched(elements.clone(), target))
        .collect();
    MemoOutcome {
        subsets,
        states_evaluated: search.cache.len(),
        cache_hits: search.cache_hits,
    }
}

type MemoKey = (usize, i64);

struct MemoSearch<'a> {
    numbers: &'a [i32],
    target: i64,
    cache: HashMap<MemoKey, Rc<Vec<Vec<i64>>>>,
    cache_hits: usize,
}

impl MemoSearch<'_> {
    fn suffixes(&mut self, index: usize, running_sum: i64) -> Rc<Vec<Vec<i64>>> {
        if let Some(hit) = self.cache.get(&(index, running_sum)) {
            self.cache_hits += 1;
            return Rc::clone(hit);
        }

        let mut found: Vec<Vec<i64>> = Vec::new();
        if running_sum == self.target {
            // Same stopping rule as the tree search: a match ends the path.
            found.push(Vec::new());
        } else if index < self.numbers.len() && running_sum <= self.target {
            let value = i64::from(self.numbers[index]);

            let included = self.suffixes(index + 1, running_sum + value);
            for tail in included.iter() {
                let mut elements = Vec::with_capacity(tail.len() + 1);
                elements.push(value);
                elements.extend_from_slice(tail);
                found.push(elements);
            }

            let excluded = self.suffixes(index + 1, running_sum);
            found.extend(excluded.iter().cloned());
        }

        let found = Rc::new(found);
        self.cache.insert((index, running_sum), Rc::clone(&found));
        found
    }
}
