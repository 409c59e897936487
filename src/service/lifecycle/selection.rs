//! Weekly announcement selection policy.
//!
//! From the 30-day upcoming window: keep the 4 soonest-starting events, then
//! the 2 highest-weighted of those. Wednesday announces the heavier pick,
//! Thursday the other. Any other weekday announces nothing.

use chrono::Weekday;
use std::cmp::Ordering;

use crate::model::CtfEvent;

/// How far ahead the announcement tick looks.
pub const SELECTION_WINDOW_DAYS: i64 = 30;

/// Slot index announced on the given weekday, if any.
pub fn slot_for_weekday(weekday: Weekday) -> Option<usize> {
    match weekday {
        Weekday::Wed => Some(0),
        Weekday::Thu => Some(1),
        _ => None,
    }
}

/// Narrows the window to at most two picks: 4 soonest starts, then the 2
/// heaviest of those, heaviest first.
pub fn shortlist(mut events: Vec<CtfEvent>) -> Vec<CtfEvent> {
    events.sort_by_key(|e| e.start);
    events.truncate(4);
    events.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.start.cmp(&b.start))
    });
    events.truncate(2);
    events
}

/// The event to announce today, if today is an announcement day and the
/// shortlist has an entry for its slot.
pub fn select_for_weekday(events: Vec<CtfEvent>, weekday: Weekday) -> Option<CtfEvent> {
    let slot = slot_for_weekday(weekday)?;
    shortlist(events).into_iter().nth(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: u64, start_day: u32, weight: f64) -> CtfEvent {
        CtfEvent {
            id,
            title: format!("CTF {}", id),
            // Same-day finish keeps the helper valid for any day of the month.
            start: Utc.with_ymd_and_hms(2026, 2, start_day, 10, 0, 0).unwrap(),
            finish: Utc.with_ymd_and_hms(2026, 2, start_day, 22, 0, 0).unwrap(),
            weight,
            url: None,
            logo: None,
            discord: None,
            canceled: false,
        }
    }

    #[test]
    fn shortlist_takes_soonest_four_then_heaviest_two() {
        // The heaviest event of all (id 5) starts too late to make the
        // soonest-four cut, so it must not appear.
        let events = vec![
            event(1, 7, 23.91),
            event(2, 10, 54.3),
            event(3, 14, 89.5),
            event(4, 21, 35.0),
            event(5, 28, 99.0),
        ];

        let picks = shortlist(events);
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].id, 3);
        assert_eq!(picks[1].id, 2);
    }

    #[test]
    fn wednesday_gets_heavier_pick_thursday_the_other() {
        let events = vec![event(1, 7, 20.0), event(2, 10, 80.0)];

        let wed = select_for_weekday(events.clone(), Weekday::Wed);
        let thu = select_for_weekday(events, Weekday::Thu);

        assert_eq!(wed.map(|e| e.id), Some(2));
        assert_eq!(thu.map(|e| e.id), Some(1));
    }

    #[test]
    fn non_announcement_days_select_nothing() {
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert!(select_for_weekday(vec![event(1, 7, 50.0)], weekday).is_none());
        }
    }

    #[test]
    fn thursday_with_single_candidate_selects_nothing() {
        let events = vec![event(1, 7, 50.0)];
        assert!(select_for_weekday(events.clone(), Weekday::Thu).is_none());
        assert_eq!(
            select_for_weekday(events, Weekday::Wed).map(|e| e.id),
            Some(1)
        );
    }

    #[test]
    fn empty_window_selects_nothing() {
        assert!(select_for_weekday(Vec::new(), Weekday::Wed).is_none());
    }

    #[test]
    fn equal_weights_break_ties_by_start() {
        let events = vec![event(1, 10, 50.0), event(2, 7, 50.0)];
        let picks = shortlist(events);
        assert_eq!(picks[0].id, 2);
        assert_eq!(picks[1].id, 1);
    }
}
