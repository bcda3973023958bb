// explorer module
mod explorer;
// memo module
mod memo;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the search modules.
//─────────────────────────────────────────────────────────────────────────────
pub use explorer::{find_subsets, pruning_may_drop_matches, SearchOutcome};
pub use memo::{find_subsets_memoized, MemoOutcome};

/// Largest input the front end accepts by default. The exploration tree has
/// up to `2^n` leaves, so longer inputs are impractical to render.
pub const RECOMMENDED_MAX_NUMBERS: usize = 20;
