/*!
 * schedsim - CLI Entry Point
 *
 * Loads a JSON process set, runs one scheduling algorithm (or all five),
 * and prints the resulting metrics. The engine itself performs no I/O.
 */

use miette::{IntoDiagnostic, WrapErr};
use sched_engine::{
    compare_all, run_scheduler, Algorithm, ProcessDescriptor, SchedulerConfig,
    SchedulerSimulation,
};
use std::fs;
use std::str::FromStr;

const USAGE: &str = "usage: schedsim <processes.json> [FCFS|SJF|RR|PRIORITY|HYBRID] [--quantum N] [--json]";

struct Args {
    input: String,
    algorithm: Option<Algorithm>,
    quantum: Option<u64>,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut input = None;
    let mut algorithm = None;
    let mut quantum = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--quantum" => {
                let value = args.next().ok_or("--quantum requires a value")?;
                quantum = Some(value.parse::<u64>().map_err(|_| "invalid quantum value")?);
            }
            "--json" => json = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ if input.is_none() => input = Some(arg),
            _ if algorithm.is_none() => {
                algorithm = Some(Algorithm::from_str(&arg).map_err(|e| e.to_string())?);
            }
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    Ok(Args {
        input: input.ok_or(USAGE)?,
        algorithm,
        quantum,
        json,
    })
}

fn print_summary(algorithm: Algorithm, simulation: &SchedulerSimulation) {
    let m = &simulation.metrics;
    println!(
        "{:<8} ({:<26}) wait {:>7.2}  turnaround {:>7.2}  response {:>7.2}  throughput {:>6.3}  cpu {:>5.1}%",
        algorithm.tag(),
        algorithm.title(),
        m.average_waiting_time,
        m.average_turnaround_time,
        m.average_response_time,
        m.throughput,
        m.cpu_utilization
    );
}

fn run(args: Args) -> miette::Result<()> {
    let text = fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("unable to read process set from {}", args.input))?;
    let processes: Vec<ProcessDescriptor> = serde_json::from_str(&text)
        .into_diagnostic()
        .wrap_err("process set is not a valid descriptor list")?;

    let mut config = SchedulerConfig::default();
    if let Some(quantum) = args.quantum {
        config = config.with_quantum(quantum);
    }

    let results: Vec<(Algorithm, SchedulerSimulation)> = match args.algorithm {
        Some(algorithm) => vec![(algorithm, run_scheduler(&processes, algorithm, &config)?)],
        None => compare_all(&processes, &config)?,
    };

    if args.json {
        let rendered: Vec<_> = results
            .iter()
            .map(|(algorithm, simulation)| {
                serde_json::json!({ "algorithm": algorithm, "simulation": simulation })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rendered).into_diagnostic()?
        );
    } else {
        for (algorithm, simulation) in &results {
            print_summary(*algorithm, simulation);
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if let Err(report) = run(args) {
        eprintln!("{report:?}");
        std::process::exit(1);
    }
}
