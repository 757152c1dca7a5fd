// src/parse/college.rs
use std::collections::BTreeSet;

use tracing::debug;

use crate::config::options::ParseOptions;
use crate::model::{LessonOccurrence, LessonType};
use super::{Formatter, extract_lesson_names, extract_rooms, extract_teachers, extract_type, resolve_weeks};
use super::unit::classify;

/// Lesson records of one timetable slot: the lesson cell plus the slot's room string.
///
/// Each unit that carries a name becomes one record. Teachers come from the unit
/// itself; rooms are shared by every record of the slot.
pub fn parse_cell(cell: &str, rooms: &str, max_weeks: u32) -> Vec<LessonOccurrence> {
    let rooms = extract_rooms(rooms);
    let out: Vec<LessonOccurrence> = classify(cell)
        .into_iter()
        .map(|unit| LessonOccurrence {
            lesson_type: extract_type(unit.text).into_iter().next(),
            teachers: extract_teachers(unit.text),
            rooms: rooms.clone(),
            active_weeks: unit.active_weeks(max_weeks),
            name: unit.name,
        })
        .collect();
    debug!(cell, lessons = out.len(), "parsed cell");
    out
}

/// Formatter for the college timetable: "1н."/"2н." parity halves,
/// "Фамилия И.О." teachers, "/"-separated rooms.
#[derive(Clone, Debug, Default)]
pub struct CollegeFormatter {
    options: ParseOptions,
}

impl CollegeFormatter {
    pub fn new(options: &ParseOptions) -> Self {
        Self { options: options.clone() }
    }
}

impl Formatter for CollegeFormatter {
    fn rooms(&self, text: &str) -> Vec<String> {
        extract_rooms(text)
    }

    fn teachers(&self, text: &str) -> Vec<String> {
        extract_teachers(text)
    }

    fn weeks(&self, cell: &str) -> Vec<BTreeSet<u32>> {
        resolve_weeks(cell, self.options.max_weeks)
    }

    fn lessons(&self, cell: &str) -> Vec<String> {
        extract_lesson_names(cell)
    }

    fn types(&self, cell: &str) -> Vec<LessonType> {
        extract_type(cell)
    }

    fn occurrences(&self, cell: &str, rooms: &str) -> Vec<LessonOccurrence> {
        parse_cell(cell, rooms, self.options.max_weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_cell_yields_two_records() {
        let cell = "1н. МАТЕМАТИКА Иванов И.О. 2н. ФИЗИКА Петров А.Б.";
        let lessons = parse_cell(cell, "101/205", 16);
        assert_eq!(lessons.len(), 2);

        assert_eq!(lessons[0].name, "Математика");
        assert_eq!(lessons[0].teachers, vec!["Иванов И.О."]);
        assert_eq!(lessons[0].rooms, vec!["101", "205"]);
        assert!(lessons[0].active_weeks.iter().all(|w| w % 2 == 1));

        assert_eq!(lessons[1].name, "Физика");
        assert_eq!(lessons[1].teachers, vec!["Петров А.Б."]);
        assert!(lessons[1].active_weeks.iter().all(|w| w % 2 == 0));
        assert_eq!(lessons[1].lesson_type, None);
    }

    #[test]
    fn empty_cell_yields_nothing() {
        assert!(parse_cell("", "", 16).is_empty());
        assert!(parse_cell("Иванов И.О.", "101", 16).is_empty());
    }

    #[test]
    fn formatter_uses_configured_term_length() {
        let fmt = CollegeFormatter::new(&ParseOptions { max_weeks: 4 });
        assert_eq!(fmt.weeks("2н ХИМИЯ"), vec![BTreeSet::from([2, 4])]);
        assert_eq!(fmt.occurrences("ХИМИЯ", "")[0].active_weeks, BTreeSet::from([1, 2, 3, 4]));
        assert!(fmt.types("лек. ХИМИЯ").is_empty());
    }
}
