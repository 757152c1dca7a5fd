// src/parse/unit.rs
use std::collections::BTreeSet;

use tracing::debug;

use crate::core::patterns::PARITY_MARKER;
use crate::model::WeekParity;
use super::names::normalize_unit;
use super::split::split;

/// One split unit that produced a lesson name, paired with its parity markers.
///
/// Week resolution and name extraction both walk this list, so a unit that
/// normalizes to nothing is dropped from both at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitUnit<'a> {
    pub text: &'a str,
    pub name: String,
    /// One entry per marker found in the unit; `None` for a digit other than 1 or 2.
    pub parities: Vec<Option<WeekParity>>,
}

impl SplitUnit<'_> {
    /// Week sets as markers appear: one per recognized marker, or the whole term
    /// when the unit has no marker at all.
    pub fn week_sets(&self, max_weeks: u32) -> Vec<BTreeSet<u32>> {
        if self.parities.is_empty() {
            return vec![WeekParity::Every.weeks(max_weeks)];
        }
        self.parities.iter().flatten().map(|p| p.weeks(max_weeks)).collect()
    }

    /// Every week the unit's lesson runs on. Markers with unknown digits count
    /// as no marker.
    pub fn active_weeks(&self, max_weeks: u32) -> BTreeSet<u32> {
        let mut weeks: BTreeSet<u32> =
            self.parities.iter().flatten().flat_map(|p| p.weeks(max_weeks)).collect();
        if weeks.is_empty() {
            weeks = WeekParity::Every.weeks(max_weeks);
        }
        weeks
    }
}

/// Parity of every marker in `text`, read from the marker's first digit.
pub fn parities(text: &str) -> Vec<Option<WeekParity>> {
    PARITY_MARKER
        .find_iter(text)
        .map(|m| m.as_str().chars().find(char::is_ascii_digit).and_then(WeekParity::from_digit))
        .collect()
}

/// Split `cell` and keep the units that carry a lesson name.
pub fn classify(cell: &str) -> Vec<SplitUnit<'_>> {
    split(cell)
        .into_iter()
        .filter_map(|text| {
            let name = normalize_unit(text);
            if name.is_empty() {
                debug!(unit = text, "unit has no lesson name, skipped");
                return None;
            }
            Some(SplitUnit { text, name, parities: parities(text) })
        })
        .collect()
}
