// src/config/consts.rs

// Parsing
pub const DEFAULT_MAX_WEEKS: u32 = 16;
pub const ROOM_SEP: char = '/';

// Export
pub const TEACHER_JOIN: &str = "; ";
pub const ROOM_JOIN: &str = "/";
pub const WEEK_JOIN: &str = ",";
pub const EXPORT_HEADERS: [&str; 8] =
    ["group", "day", "slot", "name", "type", "teachers", "rooms", "weeks"];

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "schedules.json";

// Logging
pub const LOG_ENV: &str = "TIMETABLE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "timetable_cells=info";
