//! Application settings and the settings window.
//!
//! Settings persist through eframe storage (serde). The two simulation
//! parameters are immutable per `GridSim` instance, so changing either in
//! the window makes the app drop and rebuild the sim on the next frame.

use eframe::egui;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::sim::{DEFAULT_FADE_FACTOR, DEFAULT_RESOLUTION};

/// Accepted cell size range, pixels.
pub const RESOLUTION_RANGE: std::ops::RangeInclusive<f32> = 4.0..=200.0;
/// Accepted fade factor range. 1.0 would never decay, small values kill the
/// trail within a couple of frames.
pub const FADE_RANGE: std::ops::RangeInclusive<f32> = 0.5..=0.999;

/// Application settings (persistent)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Grid cell edge length in pixels.
    pub resolution: f32,
    /// Per-frame multiplicative intensity decay, in (0, 1).
    pub fade_factor: f32,
    /// Show the fading pause glyph at the idle pointer.
    pub show_pause_glyph: bool,
    /// Render the demo page content under the overlay.
    pub show_demo_page: bool,
    pub dark_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            fade_factor: DEFAULT_FADE_FACTOR,
            show_pause_glyph: true,
            show_demo_page: true,
            dark_mode: false,
        }
    }
}

impl AppSettings {
    /// Pull settings back into the accepted ranges. Out-of-range or
    /// non-finite values (CLI flags, hand-edited config files) are clamped
    /// with a warning rather than rejected.
    pub fn sanitize(&mut self) {
        self.resolution = clamp_or_default(
            self.resolution,
            RESOLUTION_RANGE,
            DEFAULT_RESOLUTION,
            "resolution",
        );
        self.fade_factor = clamp_or_default(
            self.fade_factor,
            FADE_RANGE,
            DEFAULT_FADE_FACTOR,
            "fade factor",
        );
    }
}

fn clamp_or_default(
    value: f32,
    range: std::ops::RangeInclusive<f32>,
    default: f32,
    name: &str,
) -> f32 {
    if !value.is_finite() {
        warn!("{} is not a number, using default {}", name, default);
        return default;
    }
    if !range.contains(&value) {
        let clamped = value.clamp(*range.start(), *range.end());
        warn!("{} {} out of range, clamped to {}", name, value, clamped);
        return clamped;
    }
    value
}

/// Render the settings window. The caller compares `resolution` and
/// `fade_factor` against the values applied to the running sim and rebuilds
/// it when they diverge.
pub fn render_settings_window(
    ctx: &egui::Context,
    show_settings: &mut bool,
    settings: &mut AppSettings,
) {
    egui::Window::new("Settings")
        .id(egui::Id::new("settings_window"))
        .open(show_settings)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.heading("Grid");
            ui.add_space(4.0);

            ui.add(
                egui::Slider::new(&mut settings.resolution, RESOLUTION_RANGE)
                    .text("Cell size (px)"),
            );
            ui.add(
                egui::Slider::new(&mut settings.fade_factor, FADE_RANGE)
                    .text("Fade factor")
                    .fixed_decimals(3),
            );
            ui.label("Changing either rebuilds the grid from scratch.");

            ui.add_space(8.0);
            ui.heading("Overlay");
            ui.add_space(4.0);

            ui.checkbox(&mut settings.show_pause_glyph, "Pause glyph at idle pointer");
            ui.checkbox(&mut settings.show_demo_page, "Demo page content");
            ui.checkbox(&mut settings.dark_mode, "Dark mode");
        });
}
