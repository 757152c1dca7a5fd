// src/core/patterns.rs
//! Compiled patterns shared by the cell parsers.
//!
//! Character classes are deliberately narrow: `[а-яА-Я]` does not cover `ё`/`Ё`,
//! and the timetables we parse never spell teacher initials with it.

pattern!(
    /// Week-parity marker as used for splitting and week resolution: "1н.", "2 н ", "1н+".
    pub PARITY_MARKER, r"\d\s*н[.\s+]*"
);

pattern!(
    /// Week-parity marker as removed from lesson names; also eats the "нед" spelling.
    /// Either case, since re-cased names must not grow new markers ("2Н" → "2н").
    pub PARITY_WORD, r"\d\s*(?i:нед|н)[.\s+]*"
);

pattern!(
    /// "Фамилия И.О." / "Фамилия И. О" teacher token.
    pub TEACHER, r"[а-яА-Я]+\s{1,3}[а-яА-Я]\.\s?[а-яА-Я](?:\.|\s|\b|$)"
);

pattern!(
    /// Leading punctuation/symbol noise.
    pub LEADING_NOISE, r"\A\W+\s*"
);

pattern!(
    /// Trailing separator run. Whitespace stops it; callers trim and repeat.
    pub TRAILING_SEPARATORS, r"[-,_.+;]+$"
);

pattern!(
    /// Lesson-type prefix: letters and one or more ".digits" groups ("пр.1", "лек.2.3").
    pub LESSON_PREFIX, r"[а-яА-Я]+(?:\.\d+)+"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for re in [
            &PARITY_MARKER, &PARITY_WORD, &TEACHER,
            &LEADING_NOISE, &TRAILING_SEPARATORS, &LESSON_PREFIX,
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn parity_marker_eats_trailing_punctuation() {
        let m = PARITY_MARKER.find("1н.+ ФИЗИКА").unwrap();
        assert_eq!(m.as_str(), "1н.+ ");
    }

    #[test]
    fn parity_word_prefers_long_spelling() {
        assert_eq!(PARITY_WORD.replace_all("2 нед. ХИМИЯ", ""), "ХИМИЯ");
    }

    #[test]
    fn parity_word_ignores_case() {
        assert_eq!(PARITY_WORD.replace_all("ФИЗИКА 2Н", ""), "ФИЗИКА ");
        assert_eq!(PARITY_WORD.replace_all("1 НЕД. ХИМИЯ", ""), "ХИМИЯ");
    }

    #[test]
    fn trailing_separators_stop_at_whitespace() {
        assert_eq!(TRAILING_SEPARATORS.replace("ХИМИЯ. ,", ""), "ХИМИЯ. ");
        assert_eq!(TRAILING_SEPARATORS.replace("ХИМИЯ;-+", ""), "ХИМИЯ");
    }

    #[test]
    fn lesson_prefix_takes_every_number_group() {
        assert_eq!(LESSON_PREFIX.find("лек.2.3 ФИЗИКА").unwrap().as_str(), "лек.2.3");
        assert!(LESSON_PREFIX.find("ФИЗИКА").is_none());
    }
}
