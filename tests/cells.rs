// tests/cells.rs
//
// Cell parsing through the public API only.
//
use std::collections::BTreeSet;

use timetable_cells::config::options::ParseOptions;
use timetable_cells::parse::{
    CollegeFormatter, Formatter, extract_lesson_names, extract_rooms, extract_teachers, extract_type,
    resolve_weeks, split,
};

const SAMPLES: &[&str] = &[
    "1н. МАТЕМАТИКА пр.1 Иванов И.О.",
    "ИНОСТРАННЫЙ ЯЗЫК, Петров А.Б.",
    "2 нед. лаб.2 ФИЗИКА (электричество)",
    "по выбору ФИЗКУЛЬТУРА",
    "1н. МАТЕМАТИКА Иванов И.О. 2н. ФИЗИКА Петров А.Б.",
    "  ИСТОРИЯ   РОССИИ  ",
    "МАТЕМАТИКА, пр.1 Иванов И.О.",
    "ФИЗИКА; лаб.2",
    "ФИЗИКА пр.1 А.Б.",
    "ПЕТРОВ Иванов И.О. А.Б. ХИМИЯ",
    "ФИЗИКА 2Н",
    "ГРУППА 2 НАБОР",
    "ХИМИЯ. ,",
];

#[test]
fn unsplit_cells_come_back_trimmed() {
    for cell in ["  ИСТОРИЯ ", "1н. ХИМИЯ", "", "1н. А 2н. Б 1н. В"] {
        assert_eq!(split(cell), vec![cell.trim()]);
    }
}

#[test]
fn split_halves_keep_order_and_content() {
    let cell = "1н. МАТЕМАТИКА Иванов И.О. 2н. ФИЗИКА Петров А.Б.";
    let halves = split(cell);
    assert_eq!(halves.len(), 2);
    assert!(halves[0].starts_with("1н."));
    assert!(halves[1].starts_with("2н."));
    assert_eq!(format!("{} {}", halves[0], halves[1]), cell);
}

#[test]
fn week_parity_on_default_term() {
    let max = ParseOptions::default().max_weeks;
    assert_eq!(
        resolve_weeks("1н. ХИМИЯ", max),
        vec![BTreeSet::from([1, 3, 5, 7, 9, 11, 13, 15])]
    );
    assert_eq!(
        resolve_weeks("2н. ХИМИЯ", max),
        vec![BTreeSet::from([2, 4, 6, 8, 10, 12, 14, 16])]
    );
    assert_eq!(resolve_weeks("ХИМИЯ", max), vec![(1..=16).collect::<BTreeSet<u32>>()]);
}

#[test]
fn names_and_weeks_stay_aligned() {
    for cell in SAMPLES.iter().chain(["1н. Иванов И.О. 2н. ХИМИЯ", "Петров А.Б.;"].iter()) {
        assert_eq!(
            extract_lesson_names(cell).len(),
            resolve_weeks(cell, 16).len(),
            "misaligned on {:?}",
            cell
        );
    }
}

#[test]
fn teachers_in_order() {
    assert_eq!(extract_teachers("Иванов И.О. Петров А.Б"), vec!["Иванов И.О.", "Петров А.Б"]);
}

#[test]
fn rooms() {
    assert_eq!(extract_rooms("101/205"), vec!["101", "205"]);
    assert!(extract_rooms("1").is_empty());
    assert!(extract_rooms("").is_empty());
}

#[test]
fn lesson_name_with_prefix_marker_and_teacher() {
    assert_eq!(extract_lesson_names("1н. МАТЕМАТИКА пр.1 Иванов И.О."), vec!["пр.1 Математика"]);
}

#[test]
fn names_are_idempotent() {
    for cell in SAMPLES {
        for name in extract_lesson_names(cell) {
            assert_eq!(extract_lesson_names(&name), vec![name.clone()], "from {:?}", cell);
        }
    }
}

#[test]
fn names_never_hold_a_teacher() {
    for cell in SAMPLES {
        for name in extract_lesson_names(cell) {
            assert!(extract_teachers(&name).is_empty(), "{:?} from {:?}", name, cell);
        }
    }
}

#[test]
fn separators_and_joined_tokens_do_not_leak() {
    assert_eq!(extract_lesson_names("МАТЕМАТИКА, пр.1 Иванов И.О."), vec!["пр.1 Математика"]);
    assert_eq!(extract_lesson_names("ФИЗИКА; лаб.2"), vec!["лаб.2 Физика"]);
    assert_eq!(extract_lesson_names("ФИЗИКА пр.1 А.Б."), vec!["пр.1"]);
    assert_eq!(extract_lesson_names("ФИЗИКА 2Н"), vec!["Физика"]);
}

#[test]
fn teacher_only_cell_has_no_lesson() {
    assert!(extract_lesson_names("Иванов И.О.,").is_empty());
    assert!(extract_lesson_names(" - Петров А. Б. ").is_empty());
    assert!(extract_lesson_names("ПЕТРОВ Иванов И.О. А.Б.").is_empty());
}

#[test]
fn lesson_type_is_not_classified_yet() {
    assert!(extract_type("лек. МАТЕМАТИКА").is_empty());
}

#[test]
fn formatter_composes_occurrences() {
    let fmt = CollegeFormatter::new(&ParseOptions { max_weeks: 6 });
    let lessons = fmt.occurrences("1н. ХИМИЯ Иванов И.О. 2н. лаб.1 БИОЛОГИЯ Петров А.Б.", "3-14/3-15");

    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0].name, "Химия");
    assert_eq!(lessons[0].active_weeks, BTreeSet::from([1, 3, 5]));
    assert_eq!(lessons[0].teachers, vec!["Иванов И.О."]);
    assert_eq!(lessons[1].name, "лаб.1 Биология");
    assert_eq!(lessons[1].active_weeks, BTreeSet::from([2, 4, 6]));
    assert_eq!(lessons[1].teachers, vec!["Петров А.Б."]);
    for lesson in &lessons {
        assert_eq!(lesson.rooms, vec!["3-14", "3-15"]);
        assert_eq!(lesson.lesson_type, None);
    }
}
