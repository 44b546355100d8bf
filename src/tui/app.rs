//! Application state for the timer UI.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::{
    report_slot, take_report, ClockState, DisplaySink, Durations, EventSink, NotificationSink,
    NullSink, Phase, ReportSlot, SessionClock, Snapshot,
};
use crate::sinks::{DesktopNotifier, HttpEventSink};
use crate::tui::SessionSettings;

/// Display sink that keeps the latest snapshot for the renderer.
struct SnapshotCell(Rc<RefCell<Snapshot>>);

impl DisplaySink for SnapshotCell {
    fn update(&mut self, snapshot: &Snapshot) {
        *self.0.borrow_mut() = snapshot.clone();
    }
}

/// Application state.
pub struct App {
    /// The session clock.
    clock: SessionClock,
    /// Durations the clock runs with, for progress calculation.
    durations: Durations,
    /// Latest snapshot, written by the clock's display sink.
    snapshot: Rc<RefCell<Snapshot>>,
    /// Sink delivery failures, written by background threads.
    reports: ReportSlot,
    /// Status message to display.
    pub status: Option<String>,
    /// When the last applied tick happened.
    last_tick: Instant,
}

impl App {
    /// Create a new app instance and wire up the clock's sinks.
    #[must_use]
    pub fn new(settings: &SessionSettings) -> Self {
        let durations = settings.overrides.unwrap_or(settings.configured);

        // Overwritten by the clock's initial snapshot on construction.
        let cell = Rc::new(RefCell::new(Snapshot {
            phase: Phase::Work,
            session_index: 1,
            remaining_seconds: settings.configured.work_seconds,
            running: false,
        }));

        let reports = report_slot();

        let display = Box::new(SnapshotCell(Rc::clone(&cell)));
        let events: Box<dyn EventSink> = match settings.endpoint.clone() {
            Some(endpoint) => Box::new(HttpEventSink::new(endpoint, Arc::clone(&reports))),
            None => Box::new(NullSink),
        };
        let notifier: Box<dyn NotificationSink> = if settings.notifications {
            Box::new(DesktopNotifier::new(Arc::clone(&reports)))
        } else {
            Box::new(NullSink)
        };

        let mut clock = SessionClock::new(settings.configured, display, events, notifier);
        if let Some(overrides) = settings.overrides {
            clock.set_durations(overrides);
        }

        Self {
            clock,
            durations,
            snapshot: cell,
            reports,
            status: Some("Press ? for help".to_string()),
            last_tick: Instant::now(),
        }
    }

    /// Start or pause the countdown.
    pub fn toggle(&mut self) {
        if self.clock.is_running() {
            self.clock.pause();
        } else {
            self.clock.start();
            self.last_tick = Instant::now();
        }
        self.status = None;
    }

    /// Reset the current phase.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.status = Some("Timer reset".to_string());
    }

    /// Skip the rest of the current phase.
    pub fn skip(&mut self) {
        if matches!(self.clock.state(), ClockState::Running | ClockState::Paused) {
            self.clock.skip();
            self.status = Some(format!("Skipped to {}", self.clock.phase()));
        } else {
            self.status = Some("Nothing to skip, press Space to start".to_string());
        }
    }

    /// Apply every whole second elapsed since the last applied tick.
    ///
    /// The clock stops itself on completion, and pause/reset/skip stop
    /// it synchronously, so no tick is ever applied past a stop.
    pub fn advance_clock(&mut self) {
        if !self.clock.is_running() {
            self.last_tick = Instant::now();
            return;
        }

        while self.last_tick.elapsed() >= Duration::from_secs(1) {
            self.last_tick += Duration::from_secs(1);
            self.clock.tick();
            if !self.clock.is_running() {
                break;
            }
        }
    }

    /// Move any pending sink failure onto the status line.
    pub fn poll_reports(&mut self) {
        if let Some(message) = take_report(&self.reports) {
            self.status = Some(message);
        }
    }

    /// Show the key help line.
    pub fn show_help(&mut self) {
        self.status = Some("Space:start/pause | s:skip | r:reset | q:quit".to_string());
    }

    /// Get the latest clock snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    /// Progress through the current phase (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let snapshot = self.snapshot.borrow();
        let total = self.durations.for_phase(snapshot.phase);
        if total == 0 {
            return 1.0;
        }
        1.0 - f64::from(snapshot.remaining_seconds) / f64::from(total)
    }

    /// Human-readable label for the current clock state.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        let snapshot = self.snapshot.borrow();
        if snapshot.running {
            if snapshot.phase.is_break() {
                "Break time"
            } else {
                "Focus time"
            }
        } else if snapshot.remaining_seconds == self.durations.for_phase(snapshot.phase) {
            "Ready to start"
        } else {
            "Paused"
        }
    }
}
