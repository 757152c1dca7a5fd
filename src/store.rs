// src/store.rs
//! Where parsed schedules go: a small key-value store keyed by group.
//!
//! `ScheduleStore` is the contract the rest of the crate talks to.
//! `MemoryStore` keeps everything in memory and can snapshot itself to a JSON file.

use std::collections::BTreeMap;
use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::model::{GroupSchedule, GroupStats, ScheduleUpdate, TeacherLesson, WeekSchedule};

pub trait ScheduleStore {
    /// Insert or replace the schedule of `group`.
    fn save_schedule(&mut self, group: &str, schedule: WeekSchedule);
    fn schedule(&self, group: &str) -> Option<GroupSchedule>;
    fn groups(&self) -> Vec<String>;

    /// Lessons whose teacher list mentions `name`, case-insensitively.
    /// A lesson is reported once even when several of its teachers match.
    fn find_teacher(&self, name: &str) -> Vec<TeacherLesson>;

    /// Each update replaces the stored one it shares a group with, or is appended.
    fn record_updates(&mut self, updates: Vec<ScheduleUpdate>);
    fn updates(&self) -> Vec<ScheduleUpdate>;
    fn update_for_group(&self, group: &str) -> Option<ScheduleUpdate>;

    /// Count one more retrieval of `group`'s schedule.
    fn bump_group_stats(&mut self, group: &str);
    fn group_stats(&self) -> Vec<GroupStats>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryStore {
    schedules: BTreeMap<String, WeekSchedule>,
    updates: Vec<ScheduleUpdate>,
    stats: BTreeMap<String, u64>,
}

/// Stored group names match a query group by substring.
fn mentions(stored: &[String], group: &str) -> bool {
    stored.iter().any(|g| g.contains(group))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store snapshot yet");
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };
        let store: Self = serde_json::from_str(&text)?;
        info!(path = %path.display(), groups = store.schedules.len(), "loaded store");
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(io::BufWriter::new(file), self)?;
        info!(path = %path.display(), groups = self.schedules.len(), "saved store");
        Ok(())
    }
}

impl ScheduleStore for MemoryStore {
    fn save_schedule(&mut self, group: &str, schedule: WeekSchedule) {
        self.schedules.insert(group.to_string(), schedule);
    }

    fn schedule(&self, group: &str) -> Option<GroupSchedule> {
        self.schedules.get(group).map(|schedule| GroupSchedule {
            group: group.to_string(),
            schedule: schedule.clone(),
        })
    }

    fn groups(&self) -> Vec<String> {
        self.schedules.keys().cloned().collect()
    }

    fn find_teacher(&self, name: &str) -> Vec<TeacherLesson> {
        let needle = name.to_lowercase();
        let mut out = Vec::new();
        for (group, schedule) in &self.schedules {
            for (weekday, slot, lesson) in schedule.iter() {
                if lesson.teachers.iter().any(|t| t.to_lowercase().contains(&needle)) {
                    out.push(TeacherLesson {
                        group: group.clone(),
                        weekday,
                        lesson_number: slot,
                        lesson: lesson.clone(),
                    });
                }
            }
        }
        debug!(name, hits = out.len(), "teacher search");
        out
    }

    fn record_updates(&mut self, updates: Vec<ScheduleUpdate>) {
        for update in updates {
            let existing = self
                .updates
                .iter()
                .position(|stored| update.groups.iter().any(|g| mentions(&stored.groups, g)));
            match existing {
                Some(ix) => self.updates[ix] = update,
                None => self.updates.push(update),
            }
        }
    }

    fn updates(&self) -> Vec<ScheduleUpdate> {
        self.updates.clone()
    }

    fn update_for_group(&self, group: &str) -> Option<ScheduleUpdate> {
        self.updates.iter().find(|u| mentions(&u.groups, group)).cloned()
    }

    fn bump_group_stats(&mut self, group: &str) {
        *self.stats.entry(group.to_string()).or_insert(0) += 1;
    }

    fn group_stats(&self) -> Vec<GroupStats> {
        self.stats
            .iter()
            .map(|(group, received)| GroupStats { group: group.clone(), received: *received })
            .collect()
    }
}
