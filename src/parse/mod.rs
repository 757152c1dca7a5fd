// src/parse/mod.rs
//! # Cell parsers
//!
//! Turn one raw timetable cell into lesson records. Everything here is pure:
//! no I/O, no shared mutable state, and malformed input degrades to empty
//! results instead of errors.
//!
//! ## Typical call chain
//! ```text
//! cell → split::split → unit::classify ─┬→ names (lesson name per unit)
//!                                       ├→ weeks (active weeks per unit)
//!                                       └→ teachers (per unit)
//! room string → rooms
//! ```
//!
//! `unit::classify` is the only place that decides whether a unit is noise,
//! which keeps names and week sets aligned.

use std::collections::BTreeSet;

use crate::model::{LessonOccurrence, LessonType};

pub mod college;
pub mod names;
pub mod rooms;
pub mod split;
pub mod teachers;
pub mod types;
pub mod unit;
pub mod weeks;

pub use college::{CollegeFormatter, parse_cell};
pub use names::extract_lesson_names;
pub use rooms::extract_rooms;
pub use split::split;
pub use teachers::extract_teachers;
pub use types::extract_type;
pub use unit::{SplitUnit, classify};
pub use weeks::resolve_weeks;

/// Field extraction for one timetable dialect.
pub trait Formatter {
    fn rooms(&self, text: &str) -> Vec<String>;
    fn teachers(&self, text: &str) -> Vec<String>;
    fn weeks(&self, cell: &str) -> Vec<BTreeSet<u32>>;
    fn lessons(&self, cell: &str) -> Vec<String>;
    fn types(&self, cell: &str) -> Vec<LessonType>;

    /// Full records for one slot.
    fn occurrences(&self, cell: &str, rooms: &str) -> Vec<LessonOccurrence>;
}
