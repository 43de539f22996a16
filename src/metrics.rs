//! Metrics and observability for the construction pipeline.

use metrics::{counter, describe_counter};

/// Metrics collector for consumer construction
#[derive(Debug, Clone)]
pub struct FactoryMetrics {
    /// Topic name for labeling
    topic: String,
}

impl FactoryMetrics {
    /// Create a metrics collector for one construction attempt
    pub fn new(topic: impl Into<String>) -> Self {
        Self::register_metrics();

        Self {
            topic: topic.into(),
        }
    }

    /// Register metric descriptions
    fn register_metrics() {
        describe_counter!(
            "consumer_factory_built_total",
            "Total number of consumers successfully constructed"
        );
        describe_counter!(
            "consumer_factory_gate_rejections_total",
            "Total number of construction attempts rejected at a validation gate"
        );
        describe_counter!(
            "consumer_factory_construction_failures_total",
            "Total number of underlying client construction failures"
        );
    }

    /// Record a successfully built consumer
    pub fn record_built(&self) {
        counter!(
            "consumer_factory_built_total",
            "topic" => self.topic.clone(),
        )
        .increment(1);
    }

    /// Record a rejection at a named validation gate
    pub fn record_gate_rejection(&self, gate: &'static str) {
        counter!(
            "consumer_factory_gate_rejections_total",
            "topic" => self.topic.clone(),
            "gate" => gate,
        )
        .increment(1);
    }

    /// Record an underlying construction failure
    pub fn record_construction_failure(&self) {
        counter!(
            "consumer_factory_construction_failures_total",
            "topic" => self.topic.clone(),
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = FactoryMetrics::new("orders");
        assert_eq!(metrics.topic, "orders");

        // Recording without an installed recorder must not panic
        metrics.record_built();
        metrics.record_gate_rejection("credential_guard");
        metrics.record_construction_failure();
    }
}
