/*!
 * Process Registry
 * Validates and normalizes input descriptors into simulation-ready records
 */

use super::descriptor::ProcessDescriptor;
use super::record::SimulationRecord;
use crate::core::errors::{SimResult, SimulationError};
use crate::scheduler::config::SchedulerConfig;
use log::debug;
use std::collections::HashSet;

/// Validate descriptors and build the time-ordered record arena.
///
/// Records come back sorted by (arrival time, input order). An empty input
/// is valid and yields an empty arena; every validation failure aborts the
/// run before any simulation step.
pub fn admit(
    processes: &[ProcessDescriptor],
    config: &SchedulerConfig,
) -> SimResult<Vec<SimulationRecord>> {
    let (min_priority, max_priority) = config.priority_range;
    let mut seen_ids = HashSet::with_capacity(processes.len());
    let mut records = Vec::with_capacity(processes.len());

    for (input_order, descriptor) in processes.iter().enumerate() {
        if descriptor.burst_time == 0 {
            return Err(invalid(descriptor, "burst time must be positive"));
        }
        if !seen_ids.insert(descriptor.id.as_str()) {
            return Err(invalid(descriptor, "duplicate process id"));
        }
        if descriptor.priority < min_priority || descriptor.priority > max_priority {
            return Err(invalid(
                descriptor,
                &format!(
                    "priority {} outside configured range [{}, {}]",
                    descriptor.priority, min_priority, max_priority
                ),
            ));
        }
        if !descriptor.io_bound_factor.is_finite()
            || !(0.0..=1.0).contains(&descriptor.io_bound_factor)
        {
            return Err(invalid(descriptor, "io_bound_factor must be within [0, 1]"));
        }

        records.push(SimulationRecord::from_descriptor(descriptor, input_order));
    }

    // Stable sort keeps input order as the arrival tie-break
    records.sort_by_key(|r| (r.arrival_time, r.input_order));

    debug!("Registry admitted {} processes", records.len());
    Ok(records)
}

fn invalid(descriptor: &ProcessDescriptor, reason: &str) -> SimulationError {
    SimulationError::InvalidProcess {
        id: descriptor.id.clone(),
        reason: reason.to_string(),
    }
}
