/*!
 * Scheduling Engine Library
 * Deterministic discrete-event CPU scheduling simulation with five policies
 */

pub mod core;
pub mod metrics;
pub mod process;
pub mod scheduler;

// Re-exports
pub use self::core::errors::{SimResult, SimulationError};
pub use self::core::types::{Priority, Tick};
pub use self::metrics::{ProcessSummary, SchedulerOutputMetrics};
pub use self::process::{PredictedAttributes, ProcessDescriptor};
pub use self::scheduler::{
    compare_all, run_scheduler, Algorithm, BlendWeights, SchedulerConfig, SchedulerSimulation,
    TimelineSlot,
};
