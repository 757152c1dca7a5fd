// src/runner.rs
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::options::{AppOptions, InputFormat};
use crate::error::Result;
use crate::model::{CellRow, WeekSchedule, Weekday};
use crate::parse::Formatter;
use crate::store::ScheduleStore;
use crate::table;

/// Fold a cell table into one week schedule per group.
///
/// Rows with an unknown weekday are skipped with a warning; cells that yield
/// no lesson still register their group so it shows up with an empty week.
pub fn build_schedules<F: Formatter>(rows: &[CellRow], formatter: &F) -> BTreeMap<String, WeekSchedule> {
    let mut out: BTreeMap<String, WeekSchedule> = BTreeMap::new();
    let mut lessons = 0usize;

    for row in rows {
        let day: Weekday = match row.day.parse() {
            Ok(d) => d,
            Err(e) => {
                warn!(group = %row.group, slot = row.slot, error = %e, "skipping row");
                continue;
            }
        };
        let found = formatter.occurrences(&row.lesson, &row.rooms);
        if found.is_empty() {
            debug!(group = %row.group, %day, slot = row.slot, "no lesson in cell");
        }
        lessons += found.len();
        out.entry(row.group.clone()).or_default().day_mut(day).put(row.slot, found);
    }

    info!(rows = rows.len(), groups = out.len(), lessons, "built schedules");
    out
}

/// Upsert every parsed group into the store.
pub fn store_schedules<S: ScheduleStore>(store: &mut S, schedules: &BTreeMap<String, WeekSchedule>) {
    for (group, schedule) in schedules {
        store.save_schedule(group, schedule.clone());
    }
}

/// Read a cell table from `input` (stdin when `None`).
pub fn read_input(input: Option<&Path>, format: InputFormat) -> Result<Vec<CellRow>> {
    match input {
        Some(path) => table::read_cells(File::open(path)?, format),
        None => table::read_cells(io::stdin().lock(), format),
    }
}

/// Parse a whole table and export it as configured. Returns the schedules for
/// callers that also want to store them.
pub fn run<F: Formatter>(
    rows: &[CellRow],
    opts: &AppOptions,
    formatter: &F,
) -> Result<BTreeMap<String, WeekSchedule>> {
    opts.validate()?;
    let schedules = build_schedules(rows, formatter);

    match opts.export.out_path() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let mut w = BufWriter::new(File::create(&path)?);
            table::export(&mut w, &schedules, &opts.export)?;
            w.flush()?;
            info!(path = %path.display(), "wrote export");
        }
        None => {
            let stdout = io::stdout();
            table::export(stdout.lock(), &schedules, &opts.export)?;
        }
    }
    Ok(schedules)
}
