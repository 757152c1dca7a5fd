// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

fn is_cased(ch: char) -> bool {
    ch.is_uppercase() || ch.is_lowercase()
}

/// At least one cased letter and no lower-case ones ("ИНФ-2", "А").
pub fn is_upper(word: &str) -> bool {
    word.chars().any(is_cased) && !word.chars().any(char::is_lowercase)
}

/// Upper-case every letter that follows a non-letter, lower-case the rest.
/// "ИН.ЯЗ" → "Ин.Яз", "МАТЕМАТИКА" → "Математика".
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_cased = false;
    for ch in word.chars() {
        if prev_cased { out.extend(ch.to_lowercase()); }
        else { out.extend(ch.to_uppercase()); }
        prev_cased = is_cased(ch);
    }
    out
}

/// Already in the shape `title_case` produces.
pub fn is_title(word: &str) -> bool {
    word.chars().any(is_cased) && title_case(word) == word
}
