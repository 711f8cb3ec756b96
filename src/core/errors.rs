/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation errors with serialization support
///
/// These cover everything a caller can get wrong. Invariant violations
/// inside a run (zero-length slice, overlapping slots) are programming
/// errors and abort via assertions instead.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Invalid process {id}: {reason}")]
    #[diagnostic(
        code(registry::invalid_process),
        help("Check the descriptor: burst time must be positive, ids unique, io_bound_factor in [0, 1] and priority within the configured range.")
    )]
    InvalidProcess { id: String, reason: String },

    #[error("Unsupported algorithm: {0}")]
    #[diagnostic(
        code(scheduler::unsupported_algorithm),
        help("Use one of FCFS, SJF, RR, PRIORITY, HYBRID.")
    )]
    UnsupportedAlgorithm(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(scheduler::invalid_configuration),
        help("Quantum must be positive for RR and HYBRID; blend weights must lie in [0, 1].")
    )]
    InvalidConfiguration(String),
}

/// Result type for engine operations
pub type SimResult<T> = std::result::Result<T, SimulationError>;
