// src/lib.rs
//! Parse free-form university timetable cells into lesson records:
//! lesson name, teachers, rooms and the weeks of the term the lesson runs on.
//!
//! ```
//! use std::collections::BTreeSet;
//! use timetable_cells::parse::{extract_lesson_names, resolve_weeks};
//!
//! let cell = "1н. МАТЕМАТИКА пр.1 Иванов И.О.";
//! assert_eq!(extract_lesson_names(cell), vec!["пр.1 Математика"]);
//! assert_eq!(resolve_weeks(cell, 4), vec![BTreeSet::from([1, 3])]);
//! ```

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod model;
pub mod parse;
pub mod runner;
pub mod store;
pub mod table;

pub use error::{Error, Result};
pub use model::LessonOccurrence;
pub use parse::{CollegeFormatter, Formatter};
