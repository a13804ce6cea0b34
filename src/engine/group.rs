// src/engine/group.rs
use indexmap::IndexMap;

use crate::engine::types::{Course, Entry, SlotGroup, SlotKey};

/// Collapse entries sharing a (day, slot, time) key. Keys keep first-seen order,
/// courses keep encounter order within their key.
pub fn group_entries<I>(entries: I) -> Vec<SlotGroup>
where
    I: IntoIterator<Item = Entry>,
{
    let mut groups: IndexMap<SlotKey, Vec<Course>> = IndexMap::new();
    for e in entries {
        groups.entry(e.key).or_default().push(e.course);
    }
    groups
        .into_iter()
        .map(|(key, courses)| SlotGroup { key, courses })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: &str, course: &str) -> Entry {
        Entry {
            trimester: None,
            key: SlotKey { day: day.into(), slot: s!("T1"), time_interval: s!("9:00 AM - 11:00 AM") },
            course: Course::Text(course.into()),
        }
    }

    #[test]
    fn keeps_first_seen_key_order() {
        let input = vec![entry("A", "a1"), entry("A", "a2"), entry("B", "b1"), entry("A", "a3")];
        let out = group_entries(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].key.day, "A");
        assert_eq!(out[1].key.day, "B");
        assert_eq!(
            out[0].courses,
            vec![Course::Text(s!("a1")), Course::Text(s!("a2")), Course::Text(s!("a3"))]
        );
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(group_entries(Vec::new()).is_empty());
    }
}
