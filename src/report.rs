// src/report.rs
//! Midterm/final split and a plain-text summary of a parsed routine.

use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::consts::{EXPECTED_DAYS, FINAL_ONLY_MARKER, SLOTS_PER_DAY};
use crate::engine::group::group_entries;
use crate::engine::types::{Course, Entry, Record, SlotGroup};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExamSplit {
    /// Slots with at least one course that also sits a midterm.
    pub mid_term: Vec<SlotGroup>,
    /// Every slot with every course.
    pub finals: Vec<SlotGroup>,
}

impl ExamSplit {
    pub fn from_records(records: &[Record]) -> Self {
        let finals = to_groups(records);
        let mid_term = finals
            .iter()
            .filter_map(|g| {
                let courses: Vec<Course> =
                    g.courses.iter().filter(|c| !is_final_only(c)).cloned().collect();
                (!courses.is_empty()).then(|| SlotGroup { key: g.key.clone(), courses })
            })
            .collect();
        Self { mid_term, finals }
    }

    /// (group, course) pairs marked final-only, in schedule order.
    pub fn final_only(&self) -> impl Iterator<Item = (&SlotGroup, &Course)> {
        self.finals
            .iter()
            .flat_map(|g| g.courses.iter().filter(|c| is_final_only(c)).map(move |c| (g, c)))
    }

    /// Slot count per day, days in day-number order.
    pub fn slots_per_day(&self) -> IndexMap<&str, usize> {
        let mut days: IndexMap<&str, usize> = IndexMap::new();
        for g in &self.finals {
            *days.entry(g.key.day.as_str()).or_default() += 1;
        }
        days.sort_by(|a, _, b, _| day_order(a).cmp(&day_order(b)));
        days
    }

    /// `Day N` labels in 1..=7 that no slot carries.
    pub fn missing_days(&self) -> Vec<String> {
        let found: Vec<usize> = self.finals.iter().filter_map(|g| day_number(&g.key.day)).collect();
        (1..=EXPECTED_DAYS)
            .filter(|n| !found.contains(n))
            .map(|n| format!("Day {n}"))
            .collect()
    }

    pub fn render(&self, title: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render_into(&mut out, title);
        out
    }

    fn render_into(&self, out: &mut String, title: &str) -> std::fmt::Result {
        let rule = "=".repeat(80);
        let final_only: Vec<(&SlotGroup, &Course)> = self.final_only().collect();
        let per_day = self.slots_per_day();
        let mid_courses: usize = self.mid_term.iter().map(|g| g.courses.len()).sum();
        let final_courses: usize = self.finals.iter().map(|g| g.courses.len()).sum();

        writeln!(out, "{rule}")?;
        writeln!(out, "{} EXAM ROUTINE SUMMARY", title.to_uppercase())?;
        writeln!(out, "{rule}")?;
        writeln!(out, "Total midterm slots: {}", self.mid_term.len())?;
        writeln!(out, "Total final slots: {}", self.finals.len())?;
        writeln!(out, "Courses marked '{FINAL_ONLY_MARKER}': {}", final_only.len())?;
        writeln!(out)?;

        if !final_only.is_empty() {
            writeln!(out, "FINAL-ONLY COURSES:")?;
            writeln!(out, "{}", "-".repeat(40))?;
            for (g, c) in &final_only {
                writeln!(out, "  * {} {}: {}", g.key.day, g.key.slot, c.label())?;
            }
            writeln!(out)?;
        }

        let days: Vec<&str> = per_day.keys().copied().collect();
        writeln!(out, "Days covered: {} ({}/{EXPECTED_DAYS})", days.join(", "), days.len())?;
        writeln!(out)?;

        writeln!(out, "SLOTS PER DAY:")?;
        writeln!(out, "{}", "-".repeat(20))?;
        for (day, n) in &per_day {
            let mark = if *n == SLOTS_PER_DAY { "ok" } else { "!!" };
            writeln!(out, "  [{mark}] {day}: {n} slots")?;
        }
        writeln!(out)?;

        writeln!(out, "COURSE COUNTS:")?;
        writeln!(out, "{}", "-".repeat(25))?;
        writeln!(out, "  Midterm courses: {mid_courses}")?;
        writeln!(out, "  Final courses: {final_courses}")?;
        writeln!(out, "  Final-only courses: {}", final_only.len())?;
        writeln!(out, "  Courses with midterm: {}", final_courses - final_only.len())?;
        writeln!(out)?;

        writeln!(out, "SCHEDULE:")?;
        writeln!(out, "{rule}")?;
        for day in &days {
            writeln!(out, "\n{day}:")?;
            writeln!(out, "{}", "-".repeat(30))?;
            for g in self.finals.iter().filter(|g| g.key.day == *day) {
                writeln!(out, "  {} ({}):", g.key.slot, g.key.time_interval)?;
                for c in &g.courses {
                    writeln!(out, "    - {}", c.label())?;
                }
            }
        }

        let expected_slots = EXPECTED_DAYS * SLOTS_PER_DAY;
        writeln!(out, "\n{rule}")?;
        writeln!(out, "EXTRACTION SUMMARY:")?;
        writeln!(out, "{rule}")?;
        if self.finals.len() == expected_slots && days.len() == EXPECTED_DAYS {
            writeln!(out, "COMPLETE: all {EXPECTED_DAYS} days with {SLOTS_PER_DAY} slots each ({expected_slots} total)")?;
        } else {
            writeln!(out, "PARTIAL: {}/{expected_slots} slots extracted", self.finals.len())?;
            let missing = self.missing_days();
            if days.len() < EXPECTED_DAYS && !missing.is_empty() {
                writeln!(out, "Missing days: {}", missing.join(", "))?;
            }
        }
        writeln!(out, "Final-only courses identified: {}", final_only.len())?;
        Ok(())
    }
}

/// Trailing number of "Day 3" or "3".
fn day_number(day: &str) -> Option<usize> {
    let digits = day.trim_end().rsplit(|c: char| !c.is_ascii_digit()).next()?;
    digits.parse().ok()
}

/// Numbered days first, by number; anything else after, by text.
fn day_order(day: &str) -> (usize, &str) {
    (day_number(day).unwrap_or(usize::MAX), day)
}

fn is_final_only(c: &Course) -> bool {
    c.label().contains(FINAL_ONLY_MARKER)
}

/// Any record list as slot groups; flat entries are grouped by key.
fn to_groups(records: &[Record]) -> Vec<SlotGroup> {
    let entries = records.iter().flat_map(|r| match r {
        Record::Entry(e) => vec![e.clone()],
        Record::Group(g) => g
            .courses
            .iter()
            .map(|c| Entry { trimester: None, key: g.key.clone(), course: c.clone() })
            .collect(),
    });
    group_entries(entries)
}
