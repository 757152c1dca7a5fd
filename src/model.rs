// src/model.rs
//! Records produced by the cell parsers and the shapes they are stored in.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Lecture,
    Seminar,
    Lab,
}

impl LessonType {
    pub fn as_str(self) -> &'static str {
        match self {
            LessonType::Lecture => "lecture",
            LessonType::Seminar => "seminar",
            LessonType::Lab => "lab",
        }
    }
}

/// Which weeks of the term a lesson runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeekParity {
    Odd,
    Even,
    Every,
}

impl WeekParity {
    /// Marker digit → parity. Only "1" and "2" mean anything.
    pub fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(WeekParity::Odd),
            '2' => Some(WeekParity::Even),
            _ => None,
        }
    }

    pub fn weeks(self, max_weeks: u32) -> BTreeSet<u32> {
        (1..=max_weeks)
            .filter(|w| match self {
                WeekParity::Odd => w % 2 == 1,
                WeekParity::Even => w % 2 == 0,
                WeekParity::Every => true,
            })
            .collect()
    }
}

/// One lesson as read out of one cell (or one half of a split cell).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonOccurrence {
    pub name: String,
    #[serde(rename = "type", default)]
    pub lesson_type: Option<LessonType>,
    #[serde(default)]
    pub teachers: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<String>,
    pub active_weeks: BTreeSet<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday,
        Weekday::Thursday, Weekday::Friday, Weekday::Saturday,
    ];

    /// 1 = Monday … 6 = Saturday.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_lowercase().as_str() {
            "1" | "monday" | "mon" | "понедельник" | "пн" => Weekday::Monday,
            "2" | "tuesday" | "tue" | "вторник" | "вт" => Weekday::Tuesday,
            "3" | "wednesday" | "wed" | "среда" | "ср" => Weekday::Wednesday,
            "4" | "thursday" | "thu" | "четверг" | "чт" => Weekday::Thursday,
            "5" | "friday" | "fri" | "пятница" | "пт" => Weekday::Friday,
            "6" | "saturday" | "sat" | "суббота" | "сб" => Weekday::Saturday,
            _ => return Err(Error::UnknownWeekday(s.to_string())),
        };
        Ok(day)
    }
}

/// Lessons of one day. `lessons[slot]` holds every occurrence sharing that slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub lessons: Vec<Vec<LessonOccurrence>>,
}

impl DaySchedule {
    pub fn put(&mut self, slot: usize, occurrences: Vec<LessonOccurrence>) {
        if self.lessons.len() <= slot {
            self.lessons.resize_with(slot + 1, Vec::new);
        }
        self.lessons[slot].extend(occurrences);
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.iter().all(Vec::is_empty)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekSchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
}

impl WeekSchedule {
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
        }
    }

    /// (weekday, slot, occurrence) in weekday, slot, cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, usize, &LessonOccurrence)> {
        Weekday::ALL.into_iter().flat_map(move |day| {
            self.day(day).lessons.iter().enumerate().flat_map(move |(slot, cell)| {
                cell.iter().map(move |lesson| (day, slot, lesson))
            })
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSchedule {
    pub group: String,
    pub schedule: WeekSchedule,
}

/// One teacher-search hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherLesson {
    pub group: String,
    pub weekday: Weekday,
    pub lesson_number: usize,
    pub lesson: LessonOccurrence,
}

/// A pending timetable change announced for some groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    pub groups: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    pub group: String,
    pub received: u64,
}

/// One row of an input cell table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRow {
    pub group: String,
    pub day: String,
    pub slot: usize,
    pub lesson: String,
    #[serde(default)]
    pub rooms: String,
}
