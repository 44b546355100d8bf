//! Sink adapters that deliver clock output to the outside world.
//!
//! Adapters never fail into the clock: delivery problems go to the
//! shared report slot and show up on the UI status line.

mod desktop;
mod http;

pub use desktop::DesktopNotifier;
pub use http::HttpEventSink;
