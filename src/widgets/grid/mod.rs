//! Tick-grid overlay widget - full-window pointer trail
//!
//! Transparent, non-interactive layer of vertical ticks driven by the
//! simulation core.

mod grid;
mod grid_ui;

pub use grid::GridOverlayConfig;
pub use grid_ui::render_grid_overlay;
