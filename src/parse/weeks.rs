// src/parse/weeks.rs
use std::collections::BTreeSet;

use super::unit::classify;

/// Active-week sets of a cell, in split-unit order.
///
/// Units without a lesson name contribute nothing. A unit normally yields one
/// set; a unit holding several markers yields one per recognized marker, so
/// degenerate cells can produce more sets than lesson names.
pub fn resolve_weeks(cell: &str, max_weeks: u32) -> Vec<BTreeSet<u32>> {
    classify(cell).iter().flat_map(|unit| unit.week_sets(max_weeks)).collect()
}
