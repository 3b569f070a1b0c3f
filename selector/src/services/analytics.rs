//! Analytics sink that writes events to the log.

use crate::core::service::{AnalyticsEvent, AnalyticsSink};

/// Emits every analytics event as an info-level JSON record under the
/// `selector::analytics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn track(&self, event: AnalyticsEvent) {
        match serde_json::to_string(&event.attributes) {
            Ok(attributes) => {
                tracing::info!(target: "selector::analytics", event = %event.name, attributes = %attributes, "Analytics event");
            }
            Err(e) => {
                tracing::warn!(target: "selector::analytics", event = %event.name, error = %e, "Unserializable analytics event");
            }
        }
    }
}
