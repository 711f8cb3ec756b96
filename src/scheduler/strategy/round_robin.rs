/*!
 * Round Robin Strategy
 * Preemptive FIFO with a fixed time quantum
 */

use super::Decision;
use crate::core::types::Tick;
use crate::process::SimulationRecord;
use log::trace;
use std::collections::VecDeque;

/// FIFO ready queue over record indices with a per-run admitted set.
///
/// Fairness rule: processes arriving during a slice are appended to the
/// tail BEFORE the preempted process is re-enqueued. This ordering decides
/// the interleaving and must be preserved exactly.
#[derive(Debug)]
pub(crate) struct RoundRobin {
    queue: VecDeque<usize>,
    admitted: Vec<bool>,
}

impl RoundRobin {
    pub fn new(process_count: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(process_count),
            admitted: vec![false; process_count],
        }
    }

    /// Enqueue every not-yet-admitted process with arrival <= now,
    /// in (arrival, input order)
    fn admit_arrivals(&mut self, now: Tick, records: &[SimulationRecord]) {
        let mut arrivals: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(index, r)| !self.admitted[*index] && r.has_arrived(now))
            .map(|(index, _)| index)
            .collect();
        arrivals.sort_by_key(|&index| (records[index].arrival_time, records[index].input_order));

        for index in arrivals {
            trace!("RR admitting {} at tick {}", records[index].id, now);
            self.admitted[index] = true;
            self.queue.push_back(index);
        }
    }

    pub fn next_slice(
        &mut self,
        now: Tick,
        records: &[SimulationRecord],
        quantum: Tick,
    ) -> Option<Decision> {
        self.admit_arrivals(now, records);
        let index = self.queue.pop_front()?;
        Some(Decision {
            index,
            run_for: quantum.min(records[index].remaining_burst),
        })
    }

    /// Arrivals during the just-finished slice go ahead of the preempted
    /// process, which returns to the tail only if work remains
    pub fn on_slice_end(&mut self, index: usize, end: Tick, records: &[SimulationRecord]) {
        self.admit_arrivals(end, records);
        if !records[index].is_finished() {
            self.queue.push_back(index);
        }
    }
}
