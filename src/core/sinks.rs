//! Collaborator ports the session clock pushes state and events through.
//!
//! The clock only ever calls out through these traits; it never imports
//! UI, network, or notification concerns. All methods are infallible at
//! the boundary: adapters handle their own failures and report them
//! through the shared [`ReportSlot`] instead of back into the clock.

use std::sync::{Arc, Mutex};

use crate::core::clock::{SessionEvent, Snapshot};

/// Receives a full state snapshot after every mutating clock command.
pub trait DisplaySink {
    fn update(&mut self, snapshot: &Snapshot);
}

/// Receives a session-ended event on completion or skip.
pub trait EventSink {
    fn record(&mut self, event: &SessionEvent);
}

/// Receives a human-readable message on natural completion.
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// Sink that discards everything.
///
/// Stands in for an unconfigured log endpoint or disabled
/// notifications.
pub struct NullSink;

impl DisplaySink for NullSink {
    fn update(&mut self, _snapshot: &Snapshot) {}
}

impl EventSink for NullSink {
    fn record(&mut self, _event: &SessionEvent) {}
}

impl NotificationSink for NullSink {
    fn notify(&mut self, _message: &str) {}
}

/// Last delivery failure reported by a sink adapter.
///
/// Shared between the UI thread and the background delivery threads;
/// holds at most one message, newest wins.
pub type ReportSlot = Arc<Mutex<Option<String>>>;

/// Create an empty report slot.
#[must_use]
pub fn report_slot() -> ReportSlot {
    Arc::new(Mutex::new(None))
}

/// Report a sink delivery failure.
pub fn report(slot: &ReportSlot, message: String) {
    if let Ok(mut current) = slot.lock() {
        *current = Some(message);
    }
}

/// Take the pending report, if any.
#[must_use]
pub fn take_report(slot: &ReportSlot) -> Option<String> {
    slot.lock().ok().and_then(|mut current| current.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_slot_roundtrip() {
        let slot = report_slot();
        assert_eq!(take_report(&slot), None);

        report(&slot, "first".to_string());
        report(&slot, "second".to_string());

        // Newest report wins, and taking drains the slot.
        assert_eq!(take_report(&slot), Some("second".to_string()));
        assert_eq!(take_report(&slot), None);
    }
}
