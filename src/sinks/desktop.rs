//! Desktop notification delivery.

use notify_rust::Notification;

use crate::core::{report, NotificationSink, ReportSlot};

/// Raises a desktop notification on session completion.
pub struct DesktopNotifier {
    reports: ReportSlot,
}

impl DesktopNotifier {
    /// Create a notifier reporting failures into `reports`.
    #[must_use]
    pub const fn new(reports: ReportSlot) -> Self {
        Self { reports }
    }
}

impl NotificationSink for DesktopNotifier {
    fn notify(&mut self, message: &str) {
        if let Err(e) = Notification::new().summary("tomo").body(message).show() {
            report(&self.reports, format!("Notification failed: {e}"));
        }
    }
}
