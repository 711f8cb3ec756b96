/*!
 * Metrics Calculator
 * Pure reduction of a finished timeline into per-process and aggregate stats
 */

use crate::core::types::Tick;
use crate::process::SimulationRecord;
use crate::scheduler::timeline::TimelineSlot;
use serde::{Deserialize, Serialize};

/// Per-process outcome of one run. All three times are non-negative for
/// valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSummary {
    pub process_id: String,
    /// turnaround minus burst
    pub waiting_time: Tick,
    /// completion minus arrival
    pub turnaround_time: Tick,
    /// first dispatch minus arrival
    pub response_time: Tick,
}

/// Aggregate statistics for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerOutputMetrics {
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
    /// Completed processes per tick of makespan
    pub throughput: f64,
    /// Busy time over makespan, as a percentage clamped to [0, 100]
    pub cpu_utilization: f64,
}

impl SchedulerOutputMetrics {
    fn zero() -> Self {
        Self {
            average_waiting_time: 0.0,
            average_turnaround_time: 0.0,
            average_response_time: 0.0,
            throughput: 0.0,
            cpu_utilization: 0.0,
        }
    }
}

/// Reduce finished records and their timeline into summaries and metrics.
///
/// Never mutates simulation state. Degenerate inputs (empty run, zero
/// makespan) produce zero-valued metrics rather than NaN or an error.
pub fn calculate(
    records: &[SimulationRecord],
    timeline: &[TimelineSlot],
) -> (Vec<ProcessSummary>, SchedulerOutputMetrics) {
    if records.is_empty() {
        return (Vec::new(), SchedulerOutputMetrics::zero());
    }

    // Summaries in the caller's input order
    let mut ordered: Vec<&SimulationRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.input_order);

    let summaries: Vec<ProcessSummary> = ordered
        .iter()
        .map(|record| {
            let finished_at = record
                .finished_at
                .expect("record not finished after run completion");
            let first_run_at = record
                .first_run_at
                .expect("finished record never dispatched");
            let turnaround_time = finished_at - record.arrival_time;

            ProcessSummary {
                process_id: record.id.clone(),
                waiting_time: turnaround_time - record.burst_time,
                turnaround_time,
                response_time: first_run_at - record.arrival_time,
            }
        })
        .collect();

    let count = summaries.len() as f64;
    let average_waiting_time =
        summaries.iter().map(|s| s.waiting_time as f64).sum::<f64>() / count;
    let average_turnaround_time = summaries
        .iter()
        .map(|s| s.turnaround_time as f64)
        .sum::<f64>()
        / count;
    let average_response_time = summaries
        .iter()
        .map(|s| s.response_time as f64)
        .sum::<f64>()
        / count;

    let first_arrival = records.iter().map(|r| r.arrival_time).min().unwrap_or(0);
    let last_completion = timeline.last().map(|slot| slot.end).unwrap_or(0);
    let makespan = last_completion.saturating_sub(first_arrival);
    let busy: Tick = timeline.iter().map(TimelineSlot::duration).sum();

    let (throughput, cpu_utilization) = if makespan == 0 {
        (0.0, 0.0)
    } else {
        (
            count / makespan as f64,
            (busy as f64 / makespan as f64 * 100.0).clamp(0.0, 100.0),
        )
    };

    let metrics = SchedulerOutputMetrics {
        average_waiting_time,
        average_turnaround_time,
        average_response_time,
        throughput,
        cpu_utilization,
    };

    (summaries, metrics)
}
