/*!
 * Shortest-Job-First Strategy
 * Non-preemptive, minimum burst time first
 */

use super::{ready_indices, Decision};
use crate::core::types::Tick;
use crate::process::SimulationRecord;

/// Picks the ready process with the smallest total burst and runs it to
/// completion. Ties break by arrival, then input order.
///
/// Long jobs can starve under continuous short arrivals; that is an
/// accepted property of this policy and is not mitigated here.
#[derive(Debug, Default)]
pub(crate) struct Sjf;

impl Sjf {
    pub fn next_slice(&self, now: Tick, records: &[SimulationRecord]) -> Option<Decision> {
        ready_indices(now, records)
            .min_by_key(|(_, r)| (r.burst_time, r.arrival_time, r.input_order))
            .map(|(index, r)| Decision {
                index,
                run_for: r.remaining_burst,
            })
    }
}
