//! Overlay configuration: tick geometry, colors, glyph layout.

use eframe::egui::{Color32, Vec2};

use crate::core::sim::VISIBILITY_THRESHOLD;

/// Configuration for the tick-grid overlay widget
#[derive(Clone, Debug)]
pub struct GridOverlayConfig {
    /// Tick width in pixels.
    pub tick_width: f32,
    /// Corner rounding for ticks and glyph bars.
    pub corner_radius: f32,
    /// Base tick color; the alpha channel is driven per cell by intensity,
    /// so visual fade and numeric decay stay in lockstep.
    pub color: Color32,
    /// Cells at or below this intensity are not painted.
    pub visibility_threshold: f32,
    /// Draw the fading pause glyph at the idle pointer.
    pub show_glyph: bool,
    /// Size of one pause-glyph bar.
    pub glyph_bar_size: Vec2,
    /// Horizontal offsets of the two glyph bars from the pointer.
    pub glyph_bar_offsets: [f32; 2],
    /// Vertical offset of the glyph bars from the pointer.
    pub glyph_bar_top: f32,
}

impl Default for GridOverlayConfig {
    fn default() -> Self {
        Self {
            tick_width: 3.0,
            corner_radius: 2.0,
            color: Color32::from_rgb(24, 24, 27),
            visibility_threshold: VISIBILITY_THRESHOLD,
            show_glyph: true,
            glyph_bar_size: Vec2::new(4.0, 16.0),
            glyph_bar_offsets: [-6.0, 2.0],
            glyph_bar_top: -8.0,
        }
    }
}
