//! Core session clock and its collaborator ports.
//!
//! Everything in here is synchronous, deterministic, and free of UI or
//! network concerns; those live behind the sink traits.

mod clock;
mod format;
mod sinks;

pub use clock::{
    ClockState, Durations, Phase, SessionAction, SessionClock, SessionEvent, Snapshot,
    SESSIONS_PER_CYCLE,
};
pub use format::{format_duration, format_duration_mmss};
pub use sinks::{
    report, report_slot, take_report, DisplaySink, EventSink, NotificationSink, NullSink,
    ReportSlot,
};
