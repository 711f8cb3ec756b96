/*!
 * Process Module
 * Descriptor input model, validation, and per-run simulation records
 */

pub mod descriptor;
pub mod record;
pub mod registry;

pub use descriptor::{PredictedAttributes, ProcessDescriptor};
pub use record::SimulationRecord;
