//! HTTP delivery of session events.
//!
//! Each event is posted from its own background thread so the clock
//! never waits on the network. Delivery is fire-and-forget: the
//! outcome is only observed to report failures, and the session
//! advances no matter what happens here.

use std::sync::Arc;
use std::thread;

use crate::core::{report, EventSink, ReportSlot, SessionEvent};

/// Posts session events as JSON to a configured endpoint.
pub struct HttpEventSink {
    client: reqwest::blocking::Client,
    endpoint: String,
    reports: ReportSlot,
}

impl HttpEventSink {
    /// Create a sink posting to `endpoint`.
    #[must_use]
    pub fn new(endpoint: String, reports: ReportSlot) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint,
            reports,
        }
    }
}

impl EventSink for HttpEventSink {
    fn record(&mut self, event: &SessionEvent) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let payload = event.clone();
        let reports = Arc::clone(&self.reports);

        thread::spawn(move || {
            match client.post(&endpoint).json(&payload).send() {
                Ok(response) if !response.status().is_success() => {
                    report(
                        &reports,
                        format!("Session log rejected: HTTP {}", response.status()),
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    report(&reports, format!("Session log failed: {e}"));
                }
            }
        });
    }
}
