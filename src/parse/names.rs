// src/parse/names.rs
use tracing::trace;

use crate::core::patterns::{LEADING_NOISE, LESSON_PREFIX, PARITY_WORD, TRAILING_SEPARATORS};
use crate::core::sanitize::{is_title, is_upper, normalize_ws, title_case};
use super::teachers::strip_teachers;
use super::unit::classify;

/// Lesson names of a cell, one per split unit, empty ones dropped.
pub fn extract_lesson_names(cell: &str) -> Vec<String> {
    classify(cell).into_iter().map(|unit| unit.name).collect()
}

/// Clean one split unit down to its lesson name. May return an empty string
/// (noise-only or teacher-only units).
///
/// Running it again on its own output gives the same name, and the result never
/// holds a teacher token.
pub fn normalize_unit(unit: &str) -> String {
    // "пр.1" and friends keep their spelling; only the body is cleaned and re-cased.
    let (prefix, body) = cut_prefix(&normalize_ws(unit));
    let body = clean(&body);
    let (prefix, body) = match prefix {
        Some(p) => (Some(p), body),
        // noise can hide a prefix until it is stripped
        None => {
            let (p, rest) = cut_prefix(&body);
            (p, clean(&rest))
        }
    };

    let words = recase(body.split_whitespace());
    let name = match prefix {
        Some(p) if words.is_empty() => p,
        Some(p) => format!("{} {}", p, words.join(" ")),
        None => words.join(" "),
    };
    trace!(unit, name = %name, "normalized unit");
    name
}

/// First lesson-type prefix, and the text with it cut out.
fn cut_prefix(text: &str) -> (Option<String>, String) {
    match LESSON_PREFIX.find(text) {
        Some(m) => (
            Some(m.as_str().to_string()),
            format!("{} {}", &text[..m.start()], &text[m.end()..]),
        ),
        None => (None, text.to_string()),
    }
}

/// Strip markers, teachers and edge noise until nothing changes. Every removal
/// can glue its neighbours into something the other steps match.
fn clean(text: &str) -> String {
    let mut text = text.to_string();
    loop {
        let next = scrub(&text);
        if next == text {
            return text;
        }
        text = next;
    }
}

fn scrub(text: &str) -> String {
    let text = normalize_ws(text);
    let text = PARITY_WORD.replace_all(&text, "");
    let text = strip_teachers(&text);
    let text = LEADING_NOISE.replace(&text, "");
    let text = TRAILING_SEPARATORS.replace(&text, "");
    text.trim().to_string()
}

/// Title-case the marker word and lower-case every other one.
///
/// The marker is the first all-upper word. A body with none (already cleaned
/// output, or a name typed in sentence case) keeps its first title-cased word
/// instead, which makes normalization idempotent.
fn recase<'a>(words: impl Iterator<Item = &'a str> + Clone) -> Vec<String> {
    let is_marker: fn(&str) -> bool =
        if words.clone().any(is_upper) { is_upper } else { is_title };

    let (out, _) = words.fold((Vec::new(), false), |(mut out, marked), word| {
        if !marked && is_marker(word) {
            out.push(title_case(word));
            (out, true)
        } else {
            out.push(word.to_lowercase());
            (out, marked)
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_marker_teacher_and_keeps_prefix() {
        assert_eq!(normalize_unit("1н. МАТЕМАТИКА пр.1 Иванов И.О."), "пр.1 Математика");
    }

    #[test]
    fn only_first_upper_word_is_titled() {
        assert_eq!(normalize_unit("ИНОСТРАННЫЙ ЯЗЫК"), "Иностранный язык");
        assert_eq!(normalize_unit("по выбору ФИЗКУЛЬТУРА"), "по выбору Физкультура");
        assert_eq!(normalize_unit("Основы ПРОГРАММИРОВАНИЯ"), "основы Программирования");
    }

    #[test]
    fn no_upper_word_keeps_first_title_word() {
        assert_eq!(normalize_unit("Физическая Культура"), "Физическая культура");
        assert_eq!(normalize_unit("физика"), "физика");
    }

    #[test]
    fn trims_noise_on_both_ends() {
        assert_eq!(normalize_unit("-- ХИМИЯ;, "), "Химия");
        assert_eq!(normalize_unit("2 нед.+ ИСТОРИЯ."), "История");
    }

    #[test]
    fn teacher_only_unit_is_empty() {
        assert_eq!(normalize_unit("Иванов И.О.,"), "");
        assert_eq!(normalize_unit(" ; "), "");
    }

    #[test]
    fn prefix_alone_survives() {
        assert_eq!(normalize_unit("лаб.2 Петров А.Б."), "лаб.2");
    }

    #[test]
    fn prefix_in_the_middle_moves_to_front() {
        assert_eq!(normalize_unit("ФИЗИКА лек.2.3 ОБЩАЯ"), "лек.2.3 Физика общая");
    }

    #[test]
    fn separator_before_mid_prefix_is_dropped() {
        assert_eq!(normalize_unit("МАТЕМАТИКА, пр.1 Иванов И.О."), "пр.1 Математика");
        assert_eq!(normalize_unit("ФИЗИКА; лаб.2"), "лаб.2 Физика");
        assert_eq!(normalize_unit("ХИМИЯ. ,"), "Химия");
    }

    #[test]
    fn teacher_joined_by_a_cut_is_removed() {
        assert_eq!(normalize_unit("ФИЗИКА пр.1 А.Б."), "пр.1");
        assert_eq!(normalize_unit("ПЕТРОВ Иванов И.О. А.Б."), "");
    }

    #[test]
    fn upper_case_marker_letter_is_a_marker_too() {
        assert_eq!(normalize_unit("ФИЗИКА 2Н"), "Физика");
        assert_eq!(normalize_unit("ГРУППА 2 НЕД. ХИМИЯ"), "Группа химия");
    }

    #[test]
    fn prefix_is_cut_before_markers_are_stripped() {
        assert_eq!(normalize_unit("пр.1 НЕМЕЦКИЙ ЯЗЫК"), "пр.1 Немецкий язык");
        assert_eq!(normalize_unit("пр.1 Немецкий язык"), "пр.1 Немецкий язык");
    }
}
