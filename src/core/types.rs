/*!
 * Core Types
 * Common types used across the simulation engine
 */

/// Simulated time in integer ticks
pub type Tick = u64;

/// Priority level (lower value = more urgent)
pub type Priority = u32;

/// Fixed-point scale applied to priorities when blending and aging,
/// so effective priorities stay in integer arithmetic and runs stay
/// deterministic across platforms.
pub const PRIORITY_SCALE: i64 = 1000;
