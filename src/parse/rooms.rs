// src/parse/rooms.rs
use crate::config::consts::ROOM_SEP;

/// Room labels of a slot. A one-character or empty string means no room was recorded.
/// Empty pieces between adjacent separators are kept.
pub fn extract_rooms(text: &str) -> Vec<String> {
    if text.chars().count() <= 1 {
        return Vec::new();
    }
    text.split(ROOM_SEP).map(|room| room.trim().to_string()).collect()
}
