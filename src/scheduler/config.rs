/*!
 * Scheduler Configuration
 * Quantum, aging, and hybrid blend parameters with documented defaults
 */

use super::Algorithm;
use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::{Priority, Tick};
use serde::{Deserialize, Serialize};

/// Weights blending declared and predicted attributes for the HYBRID
/// policy. Applied once at admission, never re-derived mid-run.
///
/// Each `*_declared` weight is the share given to the declared attribute;
/// the predicted attribute receives the complement. `io_slice_bias` sets
/// how I/O-boundedness modulates slice length:
/// `slice = blended_quantum * (io_slice_bias - io_bound_factor)`, so with
/// the default 1.5 a fully CPU-bound process gets 1.5x slices and a fully
/// I/O-bound one 0.5x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BlendWeights {
    pub burst_declared: f64,
    pub priority_declared: f64,
    pub quantum_declared: f64,
    pub io_slice_bias: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            burst_declared: 0.5,
            priority_declared: 0.4,
            quantum_declared: 0.5,
            io_slice_bias: 1.5,
        }
    }
}

/// Configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerConfig {
    /// Time quantum for RR slices and the HYBRID baseline slice.
    /// FCFS/SJF/PRIORITY ignore it except as the default aging step.
    pub quantum: Tick,
    /// Ticks of waiting per one full priority level of aging boost;
    /// defaults to the quantum when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aging_step: Option<Tick>,
    /// Inclusive (min, max) bounds validated at admission
    pub priority_range: (Priority, Priority),
    pub blend: BlendWeights,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: 4,
            aging_step: None,
            priority_range: (0, 255),
            blend: BlendWeights::default(),
        }
    }
}

impl SchedulerConfig {
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_aging_step(mut self, step: Tick) -> Self {
        self.aging_step = Some(step);
        self
    }

    pub fn with_priority_range(mut self, min: Priority, max: Priority) -> Self {
        self.priority_range = (min, max);
        self
    }

    pub fn with_blend(mut self, blend: BlendWeights) -> Self {
        self.blend = blend;
        self
    }

    /// Effective aging step in ticks, never zero
    pub fn aging_step_ticks(&self) -> Tick {
        self.aging_step.unwrap_or(self.quantum).max(1)
    }

    /// Check the configuration against the selected algorithm
    pub fn validate(&self, algorithm: Algorithm) -> SimResult<()> {
        if self.quantum == 0
            && matches!(algorithm, Algorithm::RoundRobin | Algorithm::Hybrid)
        {
            return Err(SimulationError::InvalidConfiguration(format!(
                "quantum must be positive for {algorithm}"
            )));
        }
        if self.priority_range.0 > self.priority_range.1 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "priority range ({}, {}) is inverted",
                self.priority_range.0, self.priority_range.1
            )));
        }

        let b = &self.blend;
        for (name, weight) in [
            ("burst_declared", b.burst_declared),
            ("priority_declared", b.priority_declared),
            ("quantum_declared", b.quantum_declared),
        ] {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "blend weight {name} must be within [0, 1]"
                )));
            }
        }
        if !b.io_slice_bias.is_finite() || b.io_slice_bias <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(
                "io_slice_bias must be a positive finite value".to_string(),
            ));
        }

        Ok(())
    }
}
