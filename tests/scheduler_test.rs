/*!
 * Integration Tests for the Scheduling Engine
 * Exercises the public API across all five algorithms
 */

use pretty_assertions::assert_eq;
use sched_engine::{
    compare_all, run_scheduler, Algorithm, PredictedAttributes, ProcessDescriptor,
    SchedulerConfig, SchedulerSimulation, SimulationError, Tick, TimelineSlot,
};
use std::collections::HashMap;

fn sample_processes() -> Vec<ProcessDescriptor> {
    vec![
        ProcessDescriptor::new("P1", "P1", 0, 5, 3)
            .with_io_bound_factor(0.2)
            .with_memory_footprint(128),
        ProcessDescriptor::new("P2", "P2", 1, 3, 1)
            .with_io_bound_factor(0.4)
            .with_memory_footprint(96),
        ProcessDescriptor::new("P3", "P3", 2, 8, 4)
            .with_io_bound_factor(0.5)
            .with_memory_footprint(200)
            .with_predicted(PredictedAttributes {
                burst_time: 6.0,
                priority: 2.0,
                quantum: 3.0,
                memory_footprint: 180.0,
            }),
    ]
}

fn slot(id: &str, start: Tick, end: Tick) -> TimelineSlot {
    TimelineSlot {
        process_id: id.to_string(),
        start,
        end,
    }
}

fn assert_conservation(processes: &[ProcessDescriptor], simulation: &SchedulerSimulation) {
    let mut executed: HashMap<&str, Tick> = HashMap::new();
    for slot in &simulation.timeline {
        *executed.entry(slot.process_id.as_str()).or_default() += slot.end - slot.start;
    }
    for process in processes {
        assert_eq!(
            executed.get(process.id.as_str()).copied().unwrap_or(0),
            process.burst_time,
            "work created or lost for {}",
            process.id
        );
    }
}

fn assert_ordered_non_overlapping(simulation: &SchedulerSimulation) {
    for window in simulation.timeline.windows(2) {
        assert!(window[0].start < window[0].end);
        assert!(window[1].start >= window[0].end, "overlapping slots");
    }
}

#[test]
fn test_fcfs_reference_timeline() {
    let processes = vec![
        ProcessDescriptor::new("P1", "P1", 0, 5, 1),
        ProcessDescriptor::new("P2", "P2", 1, 3, 1),
        ProcessDescriptor::new("P3", "P3", 2, 8, 1),
    ];
    let simulation =
        run_scheduler(&processes, Algorithm::Fcfs, &SchedulerConfig::default()).unwrap();

    assert_eq!(
        simulation.timeline,
        vec![slot("P1", 0, 5), slot("P2", 5, 8), slot("P3", 8, 16)]
    );
    let waits: Vec<Tick> = simulation.processes.iter().map(|p| p.waiting_time).collect();
    let turnarounds: Vec<Tick> = simulation
        .processes
        .iter()
        .map(|p| p.turnaround_time)
        .collect();
    assert_eq!(waits, vec![0, 4, 6]);
    assert_eq!(turnarounds, vec![5, 7, 14]);
    assert!((simulation.metrics.average_waiting_time - 10.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_sjf_runs_shortest_ready_job_to_completion() {
    let processes = vec![
        ProcessDescriptor::new("long", "long", 0, 8, 1),
        ProcessDescriptor::new("mid", "mid", 1, 4, 1),
        ProcessDescriptor::new("short", "short", 2, 2, 1),
    ];
    let simulation =
        run_scheduler(&processes, Algorithm::Sjf, &SchedulerConfig::default()).unwrap();

    // "long" is alone at t=0; afterwards the shorter jobs win
    assert_eq!(
        simulation.timeline,
        vec![slot("long", 0, 8), slot("short", 8, 10), slot("mid", 10, 14)]
    );
}

#[test]
fn test_rr_slice_count_is_ceil_burst_over_quantum() {
    let config = SchedulerConfig::default().with_quantum(2);
    let processes = sample_processes();
    let simulation = run_scheduler(&processes, Algorithm::RoundRobin, &config).unwrap();

    for process in &processes {
        let slices: Vec<&TimelineSlot> = simulation
            .timeline
            .iter()
            .filter(|slot| slot.process_id == process.id)
            .collect();
        let expected = process.burst_time.div_ceil(2);
        assert_eq!(slices.len() as Tick, expected, "slices for {}", process.id);
    }
}

#[test]
fn test_rr_canonical_interleaving() {
    // Arrivals during a slice precede the returning process
    let config = SchedulerConfig::default().with_quantum(2);
    let processes = vec![
        ProcessDescriptor::new("P1", "P1", 0, 5, 1),
        ProcessDescriptor::new("P2", "P2", 1, 3, 1),
    ];
    let simulation = run_scheduler(&processes, Algorithm::RoundRobin, &config).unwrap();

    assert_eq!(
        simulation.timeline,
        vec![
            slot("P1", 0, 2),
            slot("P2", 2, 4),
            slot("P1", 4, 6),
            slot("P2", 6, 7),
            slot("P1", 7, 8),
        ]
    );
}

#[test]
fn test_rr_single_process_emits_separate_quantum_slots() {
    let config = SchedulerConfig::default().with_quantum(2);
    let processes = vec![ProcessDescriptor::new("P1", "P1", 0, 5, 1)];
    let simulation = run_scheduler(&processes, Algorithm::RoundRobin, &config).unwrap();

    let lengths: Vec<Tick> = simulation
        .timeline
        .iter()
        .map(|slot| slot.end - slot.start)
        .collect();
    assert_eq!(lengths, vec![2, 2, 1]);
}

#[test]
fn test_empty_input_yields_zero_metrics_for_all_algorithms() {
    let config = SchedulerConfig::default().with_quantum(4);
    for algorithm in Algorithm::ALL {
        let simulation = run_scheduler(&[], algorithm, &config).unwrap();
        assert!(simulation.timeline.is_empty());
        assert!(simulation.processes.is_empty());
        assert_eq!(simulation.metrics.average_waiting_time, 0.0);
        assert_eq!(simulation.metrics.throughput, 0.0);
        assert_eq!(simulation.metrics.cpu_utilization, 0.0);
    }
}

#[test]
fn test_all_algorithms_satisfy_core_properties() {
    let processes = sample_processes();
    let config = SchedulerConfig::default();

    for algorithm in Algorithm::ALL {
        let simulation = run_scheduler(&processes, algorithm, &config).unwrap();

        assert_conservation(&processes, &simulation);
        assert_ordered_non_overlapping(&simulation);
        assert!(simulation.metrics.cpu_utilization >= 0.0);
        assert!(simulation.metrics.cpu_utilization <= 100.0);
        // Non-negativity holds by construction (unsigned), so check the
        // summaries exist and makespan-derived metrics are sane instead
        assert_eq!(simulation.processes.len(), processes.len());
        assert!(simulation.metrics.throughput > 0.0, "{algorithm}");
    }
}

#[test]
fn test_reruns_are_byte_identical() {
    let processes = sample_processes();
    let config = SchedulerConfig::default();

    for algorithm in Algorithm::ALL {
        let first = run_scheduler(&processes, algorithm, &config).unwrap();
        let second = run_scheduler(&processes, algorithm, &config).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
            "{algorithm} is not deterministic"
        );
    }
}

#[test]
fn test_compare_all_matches_individual_runs() {
    let processes = sample_processes();
    let config = SchedulerConfig::default();

    let results = compare_all(&processes, &config).unwrap();
    assert_eq!(results.len(), 5);

    for (algorithm, simulation) in results {
        let individual = run_scheduler(&processes, algorithm, &config).unwrap();
        assert_eq!(simulation, individual, "{algorithm}");
    }
}

#[test]
fn test_invalid_descriptors_are_rejected_before_simulation() {
    let config = SchedulerConfig::default();

    let zero_burst = vec![ProcessDescriptor::new("P1", "P1", 0, 0, 1)];
    assert!(matches!(
        run_scheduler(&zero_burst, Algorithm::Fcfs, &config),
        Err(SimulationError::InvalidProcess { .. })
    ));

    let duplicate = vec![
        ProcessDescriptor::new("P1", "P1", 0, 5, 1),
        ProcessDescriptor::new("P1", "P1-bis", 1, 2, 1),
    ];
    assert!(run_scheduler(&duplicate, Algorithm::Sjf, &config).is_err());
}

#[test]
fn test_zero_quantum_is_a_configuration_error_for_rr_and_hybrid() {
    let processes = sample_processes();
    let config = SchedulerConfig::default().with_quantum(0);

    for algorithm in [Algorithm::RoundRobin, Algorithm::Hybrid] {
        assert!(matches!(
            run_scheduler(&processes, algorithm, &config),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }
    // FCFS ignores the quantum entirely
    assert!(run_scheduler(&processes, Algorithm::Fcfs, &config).is_ok());
}

#[test]
fn test_priority_prefers_urgent_then_ages_the_rest() {
    let config = SchedulerConfig::default();
    let processes = vec![
        ProcessDescriptor::new("bulk", "bulk", 0, 10, 5),
        ProcessDescriptor::new("urgent", "urgent", 2, 2, 0),
    ];
    let simulation = run_scheduler(&processes, Algorithm::Priority, &config).unwrap();

    // bulk runs until the urgent arrival re-evaluates the ranking
    assert_eq!(simulation.timeline[0], slot("bulk", 0, 2));
    assert_eq!(simulation.timeline[1], slot("urgent", 2, 4));

    let urgent = simulation
        .processes
        .iter()
        .find(|p| p.process_id == "urgent")
        .unwrap();
    assert_eq!(urgent.response_time, 0);
    assert_eq!(urgent.waiting_time, 0);
}

#[test]
fn test_hybrid_gives_io_bound_processes_earlier_responses() {
    let config = SchedulerConfig::default();
    let processes = vec![
        ProcessDescriptor::new("cpu", "cpu", 0, 12, 3).with_io_bound_factor(0.0),
        ProcessDescriptor::new("io", "io", 0, 12, 3).with_io_bound_factor(0.9),
    ];
    let simulation = run_scheduler(&processes, Algorithm::Hybrid, &config).unwrap();

    let io_slices: Vec<Tick> = simulation
        .timeline
        .iter()
        .filter(|slot| slot.process_id == "io")
        .map(|slot| slot.end - slot.start)
        .collect();
    let cpu_slices: Vec<Tick> = simulation
        .timeline
        .iter()
        .filter(|slot| slot.process_id == "cpu")
        .map(|slot| slot.end - slot.start)
        .collect();

    // Shorter, more frequent slices for the I/O-bound process
    assert!(io_slices.len() > cpu_slices.len());
    assert!(io_slices.iter().max() < cpu_slices.iter().max());
    assert_conservation(&processes, &simulation);
}
