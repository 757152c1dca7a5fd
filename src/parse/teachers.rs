// src/parse/teachers.rs
use crate::core::patterns::TEACHER;
use crate::core::sanitize::normalize_ws;

/// Every "Фамилия И.О." token in `text`, trimmed, in order. Duplicates are kept.
pub fn extract_teachers(text: &str) -> Vec<String> {
    TEACHER.find_iter(text).map(|m| m.as_str().trim().to_string()).collect()
}

/// `text` with every teacher token cut out, whitespace collapsed.
///
/// Cutting a token can join a surname and initials that were apart
/// ("ПЕТРОВ Иванов И.О. А.Б."), so this repeats until nothing matches.
pub(crate) fn strip_teachers(text: &str) -> String {
    let mut text = normalize_ws(text);
    while TEACHER.is_match(&text) {
        text = normalize_ws(&TEACHER.replace_all(&text, ""));
    }
    text
}
