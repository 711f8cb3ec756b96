/*!
 * Timeline Recorder
 * Accumulates emitted slices into an ordered, non-overlapping sequence
 */

use crate::core::types::Tick;
use serde::{Deserialize, Serialize};

/// One contiguous interval during which a single process occupies the CPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimelineSlot {
    pub process_id: String,
    pub start: Tick,
    pub end: Tick,
}

impl TimelineSlot {
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// Accumulates slices for one run. Slices are appended in clock order and
/// never merged: slice boundaries are scheduling decisions, so a process
/// consuming two consecutive quanta still produces two slots.
#[derive(Debug, Default)]
pub struct TimelineRecorder {
    slots: Vec<TimelineSlot>,
}

impl TimelineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slice. Zero-length or out-of-order slices are invariant
    /// violations and abort the run.
    pub fn record(&mut self, process_id: &str, start: Tick, end: Tick) {
        assert!(start < end, "zero-length slice for process {process_id}");
        if let Some(last) = self.slots.last() {
            assert!(
                start >= last.end,
                "slice for {process_id} at {start} overlaps previous slot ending at {}",
                last.end
            );
        }
        self.slots.push(TimelineSlot {
            process_id: process_id.to_string(),
            start,
            end,
        });
    }

    /// Total CPU-busy time across all recorded slices
    pub fn busy_time(&self) -> Tick {
        self.slots.iter().map(TimelineSlot::duration).sum()
    }

    pub fn finish(self) -> Vec<TimelineSlot> {
        self.slots
    }
}
