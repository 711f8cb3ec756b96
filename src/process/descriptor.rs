/*!
 * Process Descriptors
 * Immutable input records describing the workload to simulate
 */

use crate::core::types::{Priority, Tick};
use serde::{Deserialize, Serialize};

/// Attributes supplied by an external predictor (regression estimator
/// trained on historical traces). The engine treats these as opaque input
/// data; only the HYBRID policy reads them, when blending at admission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PredictedAttributes {
    pub burst_time: f64,
    pub priority: f64,
    pub quantum: f64,
    pub memory_footprint: f64,
}

/// Input process descriptor
///
/// Immutable once a simulation starts. Priorities are lower-is-more-urgent,
/// consistently across the PRIORITY and HYBRID policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDescriptor {
    /// Unique, stable identifier
    pub id: String,
    /// Display name (never used in scheduling decisions)
    pub name: String,
    pub arrival_time: Tick,
    /// Total CPU time required (must be positive)
    pub burst_time: Tick,
    pub priority: Priority,
    /// Fraction of time the process would spend blocked on I/O (0..=1).
    /// A weighting signal only; blocking is not simulated.
    #[serde(default)]
    pub io_bound_factor: f64,
    /// Informational, never used in scheduling decisions
    #[serde(default)]
    pub memory_footprint: u64,
    /// Declared per-process quantum hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Tick>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted: Option<PredictedAttributes>,
}

impl ProcessDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arrival_time: Tick,
        burst_time: Tick,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arrival_time,
            burst_time,
            priority,
            io_bound_factor: 0.0,
            memory_footprint: 0,
            quantum: None,
            predicted: None,
        }
    }

    pub fn with_io_bound_factor(mut self, factor: f64) -> Self {
        self.io_bound_factor = factor;
        self
    }

    pub fn with_memory_footprint(mut self, bytes: u64) -> Self {
        self.memory_footprint = bytes;
        self
    }

    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = Some(quantum);
        self
    }

    pub fn with_predicted(mut self, predicted: PredictedAttributes) -> Self {
        self.predicted = Some(predicted);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let descriptor = ProcessDescriptor::new("P1", "compiler", 0, 5, 3)
            .with_io_bound_factor(0.2)
            .with_memory_footprint(128)
            .with_quantum(4);

        assert_eq!(descriptor.id, "P1");
        assert_eq!(descriptor.burst_time, 5);
        assert_eq!(descriptor.quantum, Some(4));
        assert!(descriptor.predicted.is_none());
    }

    #[test]
    fn test_descriptor_json_defaults() {
        let json = r#"{"id":"P1","name":"P1","arrival_time":0,"burst_time":5,"priority":3}"#;
        let descriptor: ProcessDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.io_bound_factor, 0.0);
        assert_eq!(descriptor.memory_footprint, 0);
        assert!(descriptor.quantum.is_none());
    }
}
