/*!
 * Hybrid Strategy
 * Dynamic priority mechanics over attributes blended with predictor output
 */

use super::{ready_indices, Decision};
use crate::core::types::{Tick, PRIORITY_SCALE};
use crate::process::SimulationRecord;
use crate::scheduler::config::SchedulerConfig;
use log::debug;

/// Attributes blended once at admission. Fixed-point so ranking stays
/// in integer arithmetic.
#[derive(Debug, Clone, Copy)]
struct BlendedAttrs {
    /// Blend of declared and predicted priority, times PRIORITY_SCALE
    priority_scaled: i64,
    /// Blend of declared and predicted burst, times PRIORITY_SCALE;
    /// used as the first tie-break so shorter expected jobs go first
    burst_scaled: i64,
    /// Slice budget: blended quantum modulated by io-boundedness.
    /// I/O-bound processes get shorter, more frequent slices.
    slice: Tick,
}

/// Priority-with-aging dispatch where each process's rank and slice length
/// come from a weighted blend of its declared attributes and the external
/// predictor's estimates. Processes without a `predicted` field fall back
/// to their declared values.
#[derive(Debug)]
pub(crate) struct Hybrid {
    blended: Vec<BlendedAttrs>,
}

impl Hybrid {
    pub fn new(records: &[SimulationRecord], config: &SchedulerConfig) -> Self {
        let weights = &config.blend;
        let blended = records
            .iter()
            .map(|r| {
                let declared_burst = r.burst_time as f64;
                let declared_priority = r.priority as f64;
                let declared_quantum = r.quantum_hint.unwrap_or(config.quantum) as f64;

                let (predicted_burst, predicted_priority, predicted_quantum) = match &r.predicted {
                    Some(p) => (p.burst_time, p.priority, p.quantum),
                    None => (declared_burst, declared_priority, declared_quantum),
                };

                let burst = weights.burst_declared * declared_burst
                    + (1.0 - weights.burst_declared) * predicted_burst;
                let priority = weights.priority_declared * declared_priority
                    + (1.0 - weights.priority_declared) * predicted_priority;
                let quantum = weights.quantum_declared * declared_quantum
                    + (1.0 - weights.quantum_declared) * predicted_quantum;

                let slice = (quantum * (weights.io_slice_bias - r.io_bound_factor))
                    .round()
                    .max(1.0) as Tick;

                debug!(
                    "Hybrid blend for {}: priority {:.2}, burst {:.2}, slice {}",
                    r.id, priority, burst, slice
                );

                BlendedAttrs {
                    priority_scaled: (priority * PRIORITY_SCALE as f64).round() as i64,
                    burst_scaled: (burst * PRIORITY_SCALE as f64).round() as i64,
                    slice,
                }
            })
            .collect();

        Self { blended }
    }

    pub fn next_slice(
        &self,
        now: Tick,
        records: &[SimulationRecord],
        config: &SchedulerConfig,
    ) -> Option<Decision> {
        let aging_step = config.aging_step_ticks();
        let (index, record) = ready_indices(now, records).min_by_key(|(index, r)| {
            let attrs = &self.blended[*index];
            let boost = (r.waited(now) as i64 * PRIORITY_SCALE) / aging_step as i64;
            (
                attrs.priority_scaled - boost,
                attrs.burst_scaled,
                r.arrival_time,
                r.input_order,
            )
        })?;

        let bound = super::reevaluation_bound(now, records, self.blended[index].slice);
        Some(Decision {
            index,
            run_for: bound.min(record.remaining_burst),
        })
    }
}
