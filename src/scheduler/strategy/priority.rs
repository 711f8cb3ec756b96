/*!
 * Dynamic Priority Strategy
 * Preemptive priority scheduling with aging-based starvation avoidance
 */

use super::{ready_indices, reevaluation_bound, Decision};
use crate::core::types::{Tick, PRIORITY_SCALE};
use crate::process::SimulationRecord;
use crate::scheduler::config::SchedulerConfig;

/// Lowest effective priority value wins. Waiting processes accumulate a
/// boost of one full priority level per `aging_step` ticks, so unbounded
/// waiting eventually forces dispatch regardless of base priority.
///
/// Slices are bounded by the re-evaluation boundary (quantum or the next
/// pending arrival, whichever is sooner) so a single process cannot
/// monopolize the CPU once aging or new arrivals change the ranking.
#[derive(Debug, Default)]
pub(crate) struct PriorityAging;

/// Base priority scaled down by the linear aging boost
pub(super) fn effective_priority(record: &SimulationRecord, now: Tick, aging_step: Tick) -> i64 {
    let base = record.priority as i64 * PRIORITY_SCALE;
    let boost = (record.waited(now) as i64 * PRIORITY_SCALE) / aging_step as i64;
    base - boost
}

impl PriorityAging {
    pub fn next_slice(
        &self,
        now: Tick,
        records: &[SimulationRecord],
        config: &SchedulerConfig,
    ) -> Option<Decision> {
        let aging_step = config.aging_step_ticks();
        let (index, record) = ready_indices(now, records).min_by_key(|(_, r)| {
            (
                effective_priority(r, now, aging_step),
                r.arrival_time,
                r.input_order,
            )
        })?;

        let bound = reevaluation_bound(now, records, config.quantum);
        Some(Decision {
            index,
            run_for: bound.min(record.remaining_burst),
        })
    }
}
