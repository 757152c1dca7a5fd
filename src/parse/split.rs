// src/parse/split.rs
use crate::core::patterns::PARITY_MARKER;

/// Split a cell holding two week-parity variants into its two halves.
///
/// Exactly two parity markers cut the cell at the start of each marker:
/// `[m1, m2)` and `[m2, end]`. Any other count leaves the cell whole.
/// Text before the first marker is dropped along with the split.
pub fn split(cell: &str) -> Vec<&str> {
    let starts: Vec<usize> = PARITY_MARKER.find_iter(cell).map(|m| m.start()).collect();
    match starts.as_slice() {
        &[first, second] => vec![cell[first..second].trim(), cell[second..].trim()],
        _ => vec![cell.trim()],
    }
}
