//! Record every degradation event of a run: component, failure mode,
//! fallback used, timestamp.

use scadgen_core::models::DegradationEvent;

use crate::tracing_setup::events;

/// Collects degradation events in the order they occurred.
#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<DegradationEvent>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a degradation event.
    pub fn record(&mut self, event: DegradationEvent) {
        events::degradation_triggered(&event.component, &event.failure, &event.fallback_used);
        self.events.push(event);
    }

    pub fn record_all(&mut self, events: impl IntoIterator<Item = DegradationEvent>) {
        for event in events {
            self.record(event);
        }
    }

    pub fn events(&self) -> &[DegradationEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events raised by `component`.
    pub fn count_for(&self, component: &str) -> usize {
        self.events
            .iter()
            .filter(|e| e.component == component)
            .count()
    }

    pub fn into_events(self) -> Vec<DegradationEvent> {
        self.events
    }
}
