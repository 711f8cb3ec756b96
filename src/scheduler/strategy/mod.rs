/*!
 * Ready-Queue Strategies
 * One selection policy per algorithm behind a closed dispatch enum
 */

use super::config::SchedulerConfig;
use super::Algorithm;
use crate::core::types::Tick;
use crate::process::SimulationRecord;

mod fcfs;
mod hybrid;
mod priority;
mod round_robin;
mod sjf;

pub(crate) use fcfs::Fcfs;
pub(crate) use hybrid::Hybrid;
pub(crate) use priority::PriorityAging;
pub(crate) use round_robin::RoundRobin;
pub(crate) use sjf::Sjf;

/// One scheduling decision: which record runs and for how long.
/// `run_for` is always at least 1 and at most the record's remaining burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decision {
    pub index: usize,
    pub run_for: Tick,
}

/// Closed set of selection policies. The algorithm set is fixed and
/// exhaustively known, so this is an enum rather than trait objects.
#[derive(Debug)]
pub(crate) enum Strategy {
    Fcfs(Fcfs),
    Sjf(Sjf),
    RoundRobin(RoundRobin),
    Priority(PriorityAging),
    Hybrid(Hybrid),
}

impl Strategy {
    pub fn new(
        algorithm: Algorithm,
        records: &[SimulationRecord],
        config: &SchedulerConfig,
    ) -> Self {
        match algorithm {
            Algorithm::Fcfs => Strategy::Fcfs(Fcfs),
            Algorithm::Sjf => Strategy::Sjf(Sjf),
            Algorithm::RoundRobin => Strategy::RoundRobin(RoundRobin::new(records.len())),
            Algorithm::Priority => Strategy::Priority(PriorityAging),
            Algorithm::Hybrid => Strategy::Hybrid(Hybrid::new(records, config)),
        }
    }

    /// Pick the next slice among arrived, unfinished processes.
    /// Returns None when nothing has arrived yet; the dispatcher then
    /// fast-forwards the clock to the next arrival.
    pub fn next_slice(
        &mut self,
        now: Tick,
        records: &[SimulationRecord],
        config: &SchedulerConfig,
    ) -> Option<Decision> {
        match self {
            Strategy::Fcfs(s) => s.next_slice(now, records),
            Strategy::Sjf(s) => s.next_slice(now, records),
            Strategy::RoundRobin(s) => s.next_slice(now, records, config.quantum),
            Strategy::Priority(s) => s.next_slice(now, records, config),
            Strategy::Hybrid(s) => s.next_slice(now, records, config),
        }
    }

    /// Hook invoked after the dispatcher applies a slice ending at `end`.
    /// Only round robin carries queue state across dispatch points.
    pub fn on_slice_end(&mut self, index: usize, end: Tick, records: &[SimulationRecord]) {
        if let Strategy::RoundRobin(s) = self {
            s.on_slice_end(index, end, records);
        }
    }
}

/// Indices of processes that have arrived and still have work
pub(super) fn ready_indices<'a>(
    now: Tick,
    records: &'a [SimulationRecord],
) -> impl Iterator<Item = (usize, &'a SimulationRecord)> {
    records
        .iter()
        .enumerate()
        .filter(move |(_, r)| r.has_arrived(now) && !r.is_finished())
}

/// Earliest arrival strictly after `now` among unfinished processes
pub(super) fn next_pending_arrival(now: Tick, records: &[SimulationRecord]) -> Option<Tick> {
    records
        .iter()
        .filter(|r| !r.is_finished() && r.arrival_time > now)
        .map(|r| r.arrival_time)
        .min()
}

/// Re-evaluation boundary for preemptive priority policies: the sooner of
/// the slice budget and the next pending arrival, never below one tick.
pub(super) fn reevaluation_bound(
    now: Tick,
    records: &[SimulationRecord],
    slice_budget: Tick,
) -> Tick {
    let mut bound = slice_budget.max(1);
    if let Some(arrival) = next_pending_arrival(now, records) {
        bound = bound.min(arrival - now);
    }
    bound.max(1)
}
