// src/table.rs
use std::collections::BTreeMap;
use std::io::{Read, Write};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::warn;

use crate::config::consts::{EXPORT_HEADERS, ROOM_JOIN, TEACHER_JOIN, WEEK_JOIN};
use crate::config::options::{ExportOptions, InputFormat};
use crate::error::Result;
use crate::model::{CellRow, LessonOccurrence, WeekSchedule, Weekday};

/* ---------------- Reading ---------------- */

/// Read a cell table with a `group,day,slot,lesson[,rooms]` header.
/// Rows that fail to decode are logged and skipped; a broken header is an error.
pub fn read_cells<R: Read>(reader: R, format: InputFormat) -> Result<Vec<CellRow>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(format.delim())
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    rdr.headers()?;
    let mut rows = Vec::new();
    for (line, result) in rdr.deserialize::<CellRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => warn!(row = line + 1, error = %e, "skipping unreadable cell row"),
        }
    }
    Ok(rows)
}

/* ---------------- Writing ---------------- */

/// Flatten one record into export columns.
pub fn occurrence_row(group: &str, day: Weekday, slot: usize, lesson: &LessonOccurrence) -> Vec<String> {
    let kind = lesson.lesson_type.map(|t| t.as_str()).unwrap_or_default();
    let weeks: Vec<String> = lesson.active_weeks.iter().map(u32::to_string).collect();

    vec![
        group.to_string(),
        day.to_string(),
        slot.to_string(),
        lesson.name.clone(),
        kind.to_string(),
        lesson.teachers.join(TEACHER_JOIN),
        lesson.rooms.join(ROOM_JOIN),
        weeks.join(WEEK_JOIN),
    ]
}

/// Write every lesson of every group as delimited rows.
pub fn write_rows<W: Write>(
    w: W,
    schedules: &BTreeMap<String, WeekSchedule>,
    include_headers: bool,
    delim: u8,
) -> Result<()> {
    let mut wtr = WriterBuilder::new().delimiter(delim).from_writer(w);
    if include_headers {
        wtr.write_record(EXPORT_HEADERS)?;
    }
    for (group, schedule) in schedules {
        for (day, slot, lesson) in schedule.iter() {
            wtr.write_record(occurrence_row(group, day, slot, lesson))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Export in whichever format the options ask for.
pub fn export<W: Write>(
    mut w: W,
    schedules: &BTreeMap<String, WeekSchedule>,
    opts: &ExportOptions,
) -> Result<()> {
    match opts.format.delim() {
        Some(delim) => write_rows(w, schedules, opts.include_headers, delim),
        None => {
            serde_json::to_writer_pretty(&mut w, schedules)?;
            writeln!(w)?;
            Ok(())
        }
    }
}

/// Same as `export`, into a string (for previews and tests).
pub fn to_export_string(schedules: &BTreeMap<String, WeekSchedule>, opts: &ExportOptions) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    export(&mut buf, schedules, opts)?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
