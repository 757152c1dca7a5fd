// src/parse/types.rs
use crate::model::LessonType;

/// Lesson type of a cell. No classification rule exists yet, so this never
/// reports anything; the occurrence composer already reads its first result.
pub fn extract_type(_cell: &str) -> Vec<LessonType> {
    Vec::new()
}
