/*!
 * Simulation Dispatcher
 * Clock-stepped dispatch loop driving a strategy over the record arena
 */

use super::config::SchedulerConfig;
use super::strategy::Strategy;
use super::timeline::{TimelineRecorder, TimelineSlot};
use crate::core::types::Tick;
use crate::process::SimulationRecord;
use log::trace;

/// Run state: Idle while the CPU waits for an arrival, Running while a
/// slice executes, Finished once every record has zero remaining burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchState {
    Idle,
    Running(usize),
    Finished,
}

/// Owns the record arena and clock for exactly one run. The loop makes
/// monotonic progress: every slice is at least one tick, so the number of
/// dispatch steps is bounded by the total burst time.
pub(crate) struct Dispatcher<'a> {
    records: Vec<SimulationRecord>,
    strategy: Strategy,
    config: &'a SchedulerConfig,
    clock: Tick,
    recorder: TimelineRecorder,
    state: DispatchState,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        records: Vec<SimulationRecord>,
        strategy: Strategy,
        config: &'a SchedulerConfig,
    ) -> Self {
        Self {
            records,
            strategy,
            config,
            clock: 0,
            recorder: TimelineRecorder::new(),
            state: DispatchState::Idle,
        }
    }

    /// Drive the simulation to completion, consuming the dispatcher and
    /// returning the frozen records plus the recorded timeline.
    pub fn run(mut self) -> (Vec<SimulationRecord>, Vec<TimelineSlot>) {
        let total_burst: Tick = self.records.iter().map(|r| r.burst_time).sum();
        let mut steps: Tick = 0;

        while !self.all_finished() {
            let Some(decision) = self
                .strategy
                .next_slice(self.clock, &self.records, self.config)
            else {
                // Nothing has arrived yet: fast-forward to the next arrival
                let next = self
                    .next_arrival()
                    .expect("unfinished process with no pending arrival");
                assert!(next > self.clock, "clock must advance on fast-forward");
                trace!("CPU idle from {} to {}", self.clock, next);
                self.clock = next;
                self.transition(DispatchState::Idle);
                continue;
            };

            let start = self.clock;
            let record = &mut self.records[decision.index];
            debug_assert!(record.has_arrived(start), "dispatched before arrival");
            assert!(
                decision.run_for >= 1 && decision.run_for <= record.remaining_burst,
                "slice of {} ticks is invalid for {} ({} remaining)",
                decision.run_for,
                record.id,
                record.remaining_burst
            );

            if record.first_run_at.is_none() {
                record.first_run_at = Some(start);
            }
            record.remaining_burst -= decision.run_for;
            self.clock = start + decision.run_for;
            if record.remaining_burst == 0 {
                record.finished_at = Some(self.clock);
                trace!("{} finished at {}", record.id, self.clock);
            } else {
                trace!("{} preempted at {}", record.id, self.clock);
            }

            self.recorder.record(&record.id, start, self.clock);
            self.strategy
                .on_slice_end(decision.index, self.clock, &self.records);
            self.transition(if self.all_finished() {
                DispatchState::Finished
            } else {
                DispatchState::Running(decision.index)
            });

            steps += 1;
            assert!(steps <= total_burst, "dispatch loop failed to make progress");
        }

        (self.records, self.recorder.finish())
    }

    fn transition(&mut self, next: DispatchState) {
        if next != self.state {
            trace!("dispatcher state {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    fn all_finished(&self) -> bool {
        self.records.iter().all(SimulationRecord::is_finished)
    }

    fn next_arrival(&self) -> Option<Tick> {
        self.records
            .iter()
            .filter(|r| !r.is_finished() && r.arrival_time > self.clock)
            .map(|r| r.arrival_time)
            .min()
    }
}
