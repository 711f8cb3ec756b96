/*!
 * Simulation Records
 * Mutable per-process bookkeeping, owned exclusively by the dispatcher
 */

use super::descriptor::{PredictedAttributes, ProcessDescriptor};
use crate::core::types::{Priority, Tick};

/// Per-process mutable state during one simulation run.
///
/// Created at admission, mutated on every slice the process receives,
/// frozen once `remaining_burst` hits zero. Lives in an arena owned by
/// the dispatcher for exactly one run; never shared across runs.
#[derive(Debug, Clone)]
pub struct SimulationRecord {
    pub id: String,
    /// Position in the caller's input list, used as the final tie-break
    pub input_order: usize,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
    pub io_bound_factor: f64,
    pub quantum_hint: Option<Tick>,
    pub predicted: Option<PredictedAttributes>,

    pub remaining_burst: Tick,
    pub first_run_at: Option<Tick>,
    pub finished_at: Option<Tick>,
}

impl SimulationRecord {
    pub fn from_descriptor(descriptor: &ProcessDescriptor, input_order: usize) -> Self {
        Self {
            id: descriptor.id.clone(),
            input_order,
            arrival_time: descriptor.arrival_time,
            burst_time: descriptor.burst_time,
            priority: descriptor.priority,
            io_bound_factor: descriptor.io_bound_factor,
            quantum_hint: descriptor.quantum,
            predicted: descriptor.predicted,
            remaining_burst: descriptor.burst_time,
            first_run_at: None,
            finished_at: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_burst == 0
    }

    pub fn has_started(&self) -> bool {
        self.first_run_at.is_some()
    }

    pub fn has_arrived(&self, now: Tick) -> bool {
        self.arrival_time <= now
    }

    /// CPU time consumed so far
    pub fn executed(&self) -> Tick {
        self.burst_time - self.remaining_burst
    }

    /// Time spent arrived but not running (the aging signal)
    pub fn waited(&self, now: Tick) -> Tick {
        now.saturating_sub(self.arrival_time)
            .saturating_sub(self.executed())
    }
}
