//! TICKGRID - Pointer-reactive tick-grid overlay library
//!
//! Re-exports all modules for use by binary targets.

// Simulation core (field, pointer, frame loop)
pub mod core;

// App modules
pub mod cli;
pub mod config;
pub mod dialogs;
pub mod widgets;

// Re-export commonly used types from core
pub use core::field::TickField;
pub use core::pointer::{PointerTracker, IDLE_FADE_FRAMES};
pub use core::sim::{GridSim, DEFAULT_FADE_FACTOR, DEFAULT_RESOLUTION, VISIBILITY_THRESHOLD};

// Re-export the overlay widget
pub use widgets::grid::{render_grid_overlay, GridOverlayConfig};
