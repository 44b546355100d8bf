//! The session clock state machine.
//!
//! Cycles timed work sessions and breaks: each work session is followed
//! by a short break, and every fourth one by a long break. The clock is
//! driven from outside by discrete commands and a once-per-second tick;
//! it never schedules timers itself, which keeps it deterministic to
//! step in tests.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::core::sinks::{DisplaySink, EventSink, NotificationSink};

/// Number of work sessions in one cycle.
pub const SESSIONS_PER_CYCLE: u32 = 4;

/// Phase of the work/break cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Timed work session
    Work,
    /// Break between work sessions
    ShortBreak,
    /// Break closing a full cycle
    LongBreak,
}

impl Phase {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work Session",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break phase.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Phase durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Work session length in seconds
    pub work_seconds: u32,
    /// Short break length in seconds
    pub short_break_seconds: u32,
    /// Long break length in seconds
    pub long_break_seconds: u32,
}

impl Durations {
    /// Create durations from whole minutes.
    #[must_use]
    pub const fn from_minutes(work: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            work_seconds: work * 60,
            short_break_seconds: short_break * 60,
            long_break_seconds: long_break * 60,
        }
    }

    /// Get the full duration of a phase in seconds.
    #[must_use]
    pub const fn for_phase(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_seconds,
            Phase::ShortBreak => self.short_break_seconds,
            Phase::LongBreak => self.long_break_seconds,
        }
    }
}

/// Observable clock state.
///
/// A countdown that reaches zero completes and rolls into the next
/// phase within the same tick, so an expired clock is never observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    /// Not running, full duration remaining
    Idle,
    /// Counting down
    Running,
    /// Not running, partway through the countdown
    Paused,
}

/// What ended a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionAction {
    /// The countdown ran to zero
    Completed,
    /// The user skipped ahead
    Skipped,
}

/// A session-ended event, recorded on completion or skip.
///
/// Serializes to the wire payload posted by the logging sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEvent {
    /// Phase that just ended
    pub phase: Phase,
    /// Work session ordinal within the cycle (1-4)
    pub session_index: u32,
    /// How the session ended
    pub action: SessionAction,
}

/// Full clock state pushed to the display sink after every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Current phase
    pub phase: Phase,
    /// Work session ordinal within the cycle (1-4)
    pub session_index: u32,
    /// Seconds left in the current phase
    pub remaining_seconds: u32,
    /// Whether the countdown is ticking
    pub running: bool,
}

impl Snapshot {
    /// Get remaining time as Duration.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(i64::from(self.remaining_seconds))
    }
}

/// The session clock.
///
/// Owns phase, remaining time, and session counting. All observable
/// side effects go through the injected sinks: the display sink gets a
/// snapshot after every mutating command, the event sink gets a
/// [`SessionEvent`] on completion or skip, and the notification sink
/// gets a message on natural completion only.
pub struct SessionClock {
    durations: Durations,
    phase: Phase,
    session_index: u32,
    remaining_seconds: u32,
    running: bool,
    display: Box<dyn DisplaySink>,
    events: Box<dyn EventSink>,
    notifier: Box<dyn NotificationSink>,
}

impl SessionClock {
    /// Create a clock, idle at the start of the first work session.
    ///
    /// Pushes the initial snapshot to the display sink.
    pub fn new(
        durations: Durations,
        display: Box<dyn DisplaySink>,
        events: Box<dyn EventSink>,
        notifier: Box<dyn NotificationSink>,
    ) -> Self {
        let mut clock = Self {
            durations,
            phase: Phase::Work,
            session_index: 1,
            remaining_seconds: durations.work_seconds,
            running: false,
            display,
            events,
            notifier,
        };
        clock.push_snapshot();
        clock
    }

    /// Start or resume the countdown.
    ///
    /// No-op while already running, so a second tick source can never
    /// be attached by repeated starts.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.push_snapshot();
    }

    /// Pause the countdown. No-op unless running.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.push_snapshot();
    }

    /// Advance the countdown by one second.
    ///
    /// Driven by the owning event loop once per elapsed second while
    /// the clock is running; ignored otherwise. The tick that reaches
    /// zero completes the phase: it records a `completed` event,
    /// notifies, and rolls into the next phase, leaving the clock idle.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        if self.remaining_seconds == 0 {
            self.complete();
        } else {
            self.push_snapshot();
        }
    }

    /// Stop the countdown and restore the phase's full duration.
    ///
    /// Keeps phase and session index.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.durations.for_phase(self.phase);
        self.push_snapshot();
    }

    /// Skip the rest of the current phase.
    ///
    /// Only a session that has been started and is partway through its
    /// countdown can be skipped; otherwise this is a no-op. Records a
    /// `skipped` event and advances to the next phase without
    /// notifying.
    pub fn skip(&mut self) {
        if !matches!(self.state(), ClockState::Running | ClockState::Paused) {
            return;
        }
        self.running = false;
        self.record(SessionAction::Skipped);
        self.advance_phase();
    }

    /// Replace the phase durations.
    ///
    /// Forces a reset so the remaining time always fits the new
    /// duration of the current phase.
    pub fn set_durations(&mut self, durations: Durations) {
        self.durations = durations;
        self.reset();
    }

    /// Get the current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            session_index: self.session_index,
            remaining_seconds: self.remaining_seconds,
            running: self.running,
        }
    }

    /// Check if the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Get the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the current work session ordinal (1-4).
    #[must_use]
    pub const fn session_index(&self) -> u32 {
        self.session_index
    }

    /// Get remaining time as Duration.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(i64::from(self.remaining_seconds))
    }

    /// Get the observable state.
    #[must_use]
    pub fn state(&self) -> ClockState {
        if self.running {
            ClockState::Running
        } else if self.remaining_seconds == self.durations.for_phase(self.phase) {
            ClockState::Idle
        } else {
            ClockState::Paused
        }
    }

    /// Natural completion: the countdown ran to zero.
    fn complete(&mut self) {
        self.running = false;
        self.record(SessionAction::Completed);
        let message = if self.phase.is_break() {
            "Break completed!"
        } else {
            "Work session completed!"
        };
        self.notifier.notify(message);
        self.advance_phase();
    }

    /// Record a session-ended event for the phase that just finished.
    fn record(&mut self, action: SessionAction) {
        self.events.record(&SessionEvent {
            phase: self.phase,
            session_index: self.session_index,
            action,
        });
    }

    /// Move to the next phase and leave the clock idle there.
    ///
    /// Work rolls into a short break, or a long break when the cycle's
    /// last session finished. A short break rolls into the next work
    /// session; a long break starts the cycle over. The next phase
    /// never auto-starts.
    fn advance_phase(&mut self) {
        match self.phase {
            Phase::Work => {
                self.phase = if self.session_index >= SESSIONS_PER_CYCLE {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                };
            }
            Phase::ShortBreak => {
                self.session_index += 1;
                self.phase = Phase::Work;
            }
            Phase::LongBreak => {
                self.session_index = 1;
                self.phase = Phase::Work;
            }
        }
        self.reset();
    }

    fn push_snapshot(&mut self) {
        let snapshot = self.snapshot();
        self.display.update(&snapshot);
    }
}
