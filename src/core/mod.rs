/*!
 * Core Module
 * Shared types and error handling for the simulation engine
 */

pub mod errors;
pub mod types;

pub use errors::{SimResult, SimulationError};
pub use types::{Priority, Tick};
