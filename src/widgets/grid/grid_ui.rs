//! Overlay painting: rounded vertical ticks plus the pause glyph.

use eframe::egui::{self, Color32, Pos2, Rect, Vec2};

use crate::core::sim::GridSim;

use super::grid::GridOverlayConfig;

/// Paint the tick grid from the pre-decay field.
///
/// Call between `GridSim::begin_frame` and `GridSim::end_frame` so the
/// painted alpha and the decay step read the same cell values. The painter
/// is a plain layer painter: the overlay draws but never takes input.
pub fn render_grid_overlay(
    painter: &egui::Painter,
    sim: &GridSim,
    config: &GridOverlayConfig,
) {
    let field = sim.field();
    let res = field.resolution();

    for row in 0..field.rows() {
        for col in 0..field.cols() {
            let intensity = field.get(col, row);
            if intensity <= config.visibility_threshold {
                continue;
            }

            // Linear height, deliberately up to twice the cell size so
            // high-intensity cells visually bleed into their neighbors
            let tick_height = res * 2.0 * intensity;
            let center = Pos2::new(
                col as f32 * res + res / 2.0,
                row as f32 * res + res / 2.0,
            );
            let rect =
                Rect::from_center_size(center, Vec2::new(config.tick_width, tick_height));
            painter.rect_filled(rect, config.corner_radius, with_alpha(config.color, intensity));
        }
    }

    if !config.show_glyph {
        return;
    }

    // Two parallel bars ("paused") at the pointer, fading out with idleness
    if let Some((pos, opacity)) = sim.cursor_glyph() {
        let color = with_alpha(config.color, opacity);
        for x_offset in config.glyph_bar_offsets {
            let rect = Rect::from_min_size(
                Pos2::new(pos.x + x_offset, pos.y + config.glyph_bar_top),
                config.glyph_bar_size,
            );
            painter.rect_filled(rect, config.corner_radius, color);
        }
    }
}

/// Apply a [0, 1] opacity to a base color.
fn with_alpha(color: Color32, opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (opacity.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_maps_intensity() {
        let base = Color32::from_rgb(24, 24, 27);
        assert_eq!(with_alpha(base, 0.0).a(), 0);
        assert_eq!(with_alpha(base, 1.0).a(), 255);
        assert_eq!(with_alpha(base, 0.5).a(), 127);
    }

    #[test]
    fn test_with_alpha_clamps_out_of_range() {
        let base = Color32::from_rgb(24, 24, 27);
        assert_eq!(with_alpha(base, -0.5).a(), 0);
        assert_eq!(with_alpha(base, 2.0).a(), 255);
    }
}
