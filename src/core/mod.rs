//! Core simulation modules - field, pointer tracking, frame loop
//!
//! These modules form the decay/deposit simulation, independent of UI.

pub mod field;
pub mod pointer;
pub mod sim;

// Re-exports for convenience
pub use field::TickField;
pub use pointer::{PointerTracker, IDLE_FADE_FRAMES};
pub use sim::GridSim;
