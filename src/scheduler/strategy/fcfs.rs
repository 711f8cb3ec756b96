/*!
 * First-Come-First-Served Strategy
 * Non-preemptive, earliest arrival first
 */

use super::{ready_indices, Decision};
use crate::core::types::Tick;
use crate::process::SimulationRecord;

/// Selects the earliest arrival among ready processes and runs it to
/// completion. Ties break by input order, so the policy is stable.
#[derive(Debug, Default)]
pub(crate) struct Fcfs;

impl Fcfs {
    pub fn next_slice(&self, now: Tick, records: &[SimulationRecord]) -> Option<Decision> {
        ready_indices(now, records)
            .min_by_key(|(_, r)| (r.arrival_time, r.input_order))
            .map(|(index, r)| Decision {
                index,
                run_for: r.remaining_burst,
            })
    }
}
