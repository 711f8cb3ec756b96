/*!
 * Scheduling Engine
 * Algorithm selection, the simulation entry points, and run output types
 */

use crate::core::errors::{SimResult, SimulationError};
use crate::metrics::{self, ProcessSummary, SchedulerOutputMetrics};
use crate::process::{registry, ProcessDescriptor};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod config;
pub mod timeline;

mod dispatcher;
mod strategy;

pub use config::{BlendWeights, SchedulerConfig};
pub use timeline::TimelineSlot;

use dispatcher::Dispatcher;
use strategy::Strategy;

/// Scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-come-first-served, non-preemptive
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-job-first, non-preemptive
    #[serde(rename = "SJF")]
    Sjf,
    /// Round robin with a fixed time quantum
    #[serde(rename = "RR")]
    RoundRobin,
    /// Preemptive dynamic priority with aging
    #[serde(rename = "PRIORITY")]
    Priority,
    /// Priority mechanics over predictor-blended attributes
    #[serde(rename = "HYBRID")]
    Hybrid,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
        Algorithm::Hybrid,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin => "RR",
            Algorithm::Priority => "PRIORITY",
            Algorithm::Hybrid => "HYBRID",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Served",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Priority => "Dynamic Priority Queue",
            Algorithm::Hybrid => "Prediction-Blended Hybrid",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::RoundRobin | Algorithm::Priority | Algorithm::Hybrid
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "RR" => Ok(Algorithm::RoundRobin),
            "PRIORITY" => Ok(Algorithm::Priority),
            "HYBRID" => Ok(Algorithm::Hybrid),
            other => Err(SimulationError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Complete output of one simulation run, returned immutable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerSimulation {
    pub timeline: Vec<TimelineSlot>,
    pub metrics: SchedulerOutputMetrics,
    pub processes: Vec<ProcessSummary>,
}

/// Run one algorithm over a process set.
///
/// Validates the configuration and descriptors, drives the dispatch loop
/// to completion, and reduces the timeline into metrics. Deterministic:
/// identical inputs produce identical output.
pub fn run_scheduler(
    processes: &[ProcessDescriptor],
    algorithm: Algorithm,
    config: &SchedulerConfig,
) -> SimResult<SchedulerSimulation> {
    config.validate(algorithm)?;
    let records = registry::admit(processes, config)?;

    info!(
        "Running {} over {} processes (quantum: {})",
        algorithm,
        records.len(),
        config.quantum
    );

    let strategy = Strategy::new(algorithm, &records, config);
    let (records, timeline) = Dispatcher::new(records, strategy, config).run();
    let (summaries, metrics) = metrics::calculate(&records, &timeline);

    Ok(SchedulerSimulation {
        timeline,
        metrics,
        processes: summaries,
    })
}

/// Run all five algorithms over the same process set in parallel.
///
/// Each run owns a private record arena; the input slice is shared
/// read-only. Results come back in `Algorithm::ALL` order.
pub fn compare_all(
    processes: &[ProcessDescriptor],
    config: &SchedulerConfig,
) -> SimResult<Vec<(Algorithm, SchedulerSimulation)>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = Algorithm::ALL
            .iter()
            .map(|&algorithm| {
                (
                    algorithm,
                    scope.spawn(move || run_scheduler(processes, algorithm, config)),
                )
            })
            .collect();

        handles
            .into_iter()
            .map(|(algorithm, handle)| {
                let simulation = handle.join().expect("comparison run panicked")?;
                Ok((algorithm, simulation))
            })
            .collect()
    })
}
