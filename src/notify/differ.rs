//! Booking state differ: classifies transitions between two snapshots.
//!
//! The admin notification loop polls the booking collection, keeps the
//! previous capture in memory, and asks this module what changed. The
//! differ itself is a pure function over the two snapshots — the caller
//! threads `previous` explicitly, so there is no hidden memory to go
//! stale between polls.

use serde::{Deserialize, Serialize};

use crate::models::{BookingSnapshot, BookingSnapshotMap, BookingStatus};

/// The kind of booking transition a diff detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingEventKind {
    /// A booking id appeared that the previous snapshot did not have.
    NewBooking,
    /// A pending booking became confirmed.
    Confirmed,
    /// A not-yet-cancelled booking became cancelled.
    Cancelled,
}

/// One classified transition, with the booking's current projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingEvent {
    /// What kind of transition happened.
    pub kind: BookingEventKind,
    /// The booking the transition happened to.
    pub booking_id: u64,
    /// The booking's projection in the current snapshot.
    pub detail: BookingSnapshot,
}

impl BookingEvent {
    /// A stable identifier for consumer-side dismissal dedup.
    ///
    /// Encodes kind, booking id, and booking date, so a dismissed event
    /// stays dismissed across polls while a later transition of the same
    /// booking still surfaces.
    pub fn dedup_key(&self) -> String {
        let kind = match self.kind {
            BookingEventKind::NewBooking => "new_booking",
            BookingEventKind::Confirmed => "confirmed",
            BookingEventKind::Cancelled => "cancelled",
        };
        format!("{}-{}-{}", kind, self.booking_id, self.detail.date)
    }
}

/// Compares two booking snapshots and emits the classified transitions.
///
/// Per booking id in `current`:
/// - absent from `previous` → [`BookingEventKind::NewBooking`];
/// - `pending → confirmed` → [`BookingEventKind::Confirmed`];
/// - newly `cancelled` → [`BookingEventKind::Cancelled`];
/// - any field-only change without a status transition emits nothing.
///
/// Ids present only in `previous` are not reported (no "deleted" event
/// exists). The differ returns every detected event unfiltered — display
/// caps are the consumer's policy, not a contract here. Diffing never
/// fails: an id with no prior state simply takes the new-booking branch.
///
/// # Examples
///
/// ```
/// use booking_engine::models::{BookingSnapshot, BookingSnapshotMap, BookingStatus};
/// use booking_engine::notify::{BookingEventKind, diff};
/// use chrono::NaiveDate;
///
/// let booking = BookingSnapshot {
///     status: BookingStatus::Pending,
///     client_name: "Amal".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     nanny_name: None,
/// };
///
/// let previous = BookingSnapshotMap::new();
/// let mut current = BookingSnapshotMap::new();
/// current.insert(9, booking);
///
/// let events = diff(&previous, &current);
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].kind, BookingEventKind::NewBooking);
/// assert_eq!(events[0].booking_id, 9);
/// ```
pub fn diff(previous: &BookingSnapshotMap, current: &BookingSnapshotMap) -> Vec<BookingEvent> {
    let mut events = Vec::new();

    for (&booking_id, snapshot) in current {
        let kind = match previous.get(&booking_id) {
            None => Some(BookingEventKind::NewBooking),
            Some(prior) => classify_transition(prior.status, snapshot.status),
        };

        if let Some(kind) = kind {
            events.push(BookingEvent {
                kind,
                booking_id,
                detail: snapshot.clone(),
            });
        }
    }

    events
}

/// Classifies a status pair into a notification-worthy transition, if any.
fn classify_transition(previous: BookingStatus, current: BookingStatus) -> Option<BookingEventKind> {
    if previous == BookingStatus::Pending && current == BookingStatus::Confirmed {
        Some(BookingEventKind::Confirmed)
    } else if current == BookingStatus::Cancelled && previous != BookingStatus::Cancelled {
        Some(BookingEventKind::Cancelled)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn snapshot(status: BookingStatus) -> BookingSnapshot {
        BookingSnapshot {
            status,
            client_name: "Amal".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            nanny_name: Some("Leila".to_string()),
        }
    }

    fn map(entries: &[(u64, BookingStatus)]) -> BookingSnapshotMap {
        entries
            .iter()
            .map(|&(id, status)| (id, snapshot(status)))
            .collect()
    }

    #[test]
    fn test_identical_snapshots_emit_nothing() {
        let state = map(&[
            (1, BookingStatus::Pending),
            (2, BookingStatus::Confirmed),
            (3, BookingStatus::Cancelled),
        ]);

        assert!(diff(&state, &state).is_empty());
    }

    #[test]
    fn test_new_booking_is_reported() {
        let previous = map(&[]);
        let current = map(&[(9, BookingStatus::Pending)]);

        let events = diff(&previous, &current);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, BookingEventKind::NewBooking);
        assert_eq!(events[0].booking_id, 9);
    }

    #[test]
    fn test_pending_to_confirmed_emits_exactly_one_event() {
        let previous = map(&[(7, BookingStatus::Pending)]);
        let current = map(&[(7, BookingStatus::Confirmed)]);

        let events = diff(&previous, &current);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, BookingEventKind::Confirmed);
        assert_eq!(events[0].booking_id, 7);
    }

    #[test]
    fn test_cancellation_from_pending_and_confirmed() {
        let previous = map(&[(1, BookingStatus::Pending), (2, BookingStatus::Confirmed)]);
        let current = map(&[(1, BookingStatus::Cancelled), (2, BookingStatus::Cancelled)]);

        let events = diff(&previous, &current);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.kind == BookingEventKind::Cancelled));
    }

    #[test]
    fn test_already_cancelled_booking_does_not_realert() {
        let previous = map(&[(1, BookingStatus::Cancelled)]);
        let current = map(&[(1, BookingStatus::Cancelled)]);

        assert!(diff(&previous, &current).is_empty());
    }

    #[test]
    fn test_completion_emits_nothing() {
        let previous = map(&[(1, BookingStatus::Confirmed)]);
        let current = map(&[(1, BookingStatus::Completed)]);

        assert!(diff(&previous, &current).is_empty());
    }

    #[test]
    fn test_field_only_change_emits_nothing() {
        let mut previous = map(&[(1, BookingStatus::Confirmed)]);
        previous.get_mut(&1).unwrap().nanny_name = Some("Sara".to_string());
        let current = map(&[(1, BookingStatus::Confirmed)]);

        // Nanny reassignment without a status transition is not an event
        assert!(diff(&previous, &current).is_empty());
    }

    #[test]
    fn test_removed_booking_emits_nothing() {
        let previous = map(&[(1, BookingStatus::Pending), (2, BookingStatus::Pending)]);
        let current = map(&[(1, BookingStatus::Pending)]);

        assert!(diff(&previous, &current).is_empty());
    }

    #[test]
    fn test_mixed_transitions_in_one_poll() {
        let previous = map(&[(1, BookingStatus::Pending), (2, BookingStatus::Confirmed)]);
        let current = map(&[
            (1, BookingStatus::Confirmed),
            (2, BookingStatus::Cancelled),
            (3, BookingStatus::Pending),
        ]);

        let events = diff(&previous, &current);
        assert_eq!(events.len(), 3);

        let kinds: Vec<(u64, BookingEventKind)> =
            events.iter().map(|e| (e.booking_id, e.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (1, BookingEventKind::Confirmed),
                (2, BookingEventKind::Cancelled),
                (3, BookingEventKind::NewBooking),
            ]
        );
    }

    #[test]
    fn test_dedup_key_encodes_kind_id_and_date() {
        let events = diff(&map(&[]), &map(&[(9, BookingStatus::Pending)]));
        assert_eq!(events[0].dedup_key(), "new_booking-9-2026-03-02");
    }

    #[test]
    fn test_event_serialization() {
        let events = diff(&map(&[]), &map(&[(9, BookingStatus::Pending)]));
        let json = serde_json::to_string(&events[0]).unwrap();
        assert!(json.contains("\"kind\":\"new_booking\""));
        assert!(json.contains("\"booking_id\":9"));

        let back: BookingEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events[0]);
    }
}
