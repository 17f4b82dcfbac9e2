//! Per-frame simulation loop over the field and pointer state.
//!
//! **Architecture**: GridSim owns the field and the pointer tracker and fixes
//! the frame ordering. Event handlers (`pointer_moved`, `pointer_left`,
//! `resize`) only mutate state; nothing is painted from them. The host runs
//! one step per display refresh:
//!
//! 1. `begin_frame()` - deposit the stroke since the last frame, advance the
//!    pointer (idle counter + previous position).
//! 2. Paint from the pre-decay field (`field()`, `cursor_glyph()`).
//! 3. `end_frame()` - apply the multiplicative fade.
//!
//! Painting between the two calls keeps the drawn alpha and the decay step
//! reading the same cell values for that frame.
//!
//! # Configuration
//!
//! `resolution` and `fade_factor` are immutable for the lifetime of a sim.
//! Changing either in the host settings drops the sim and builds a new one
//! (see `AppSettings::sanitize` for the accepted ranges).

use glam::Vec2;
use log::debug;

use crate::core::field::TickField;
use crate::core::pointer::PointerTracker;

/// Default cell edge length in pixels.
pub const DEFAULT_RESOLUTION: f32 = 20.0;
/// Default per-frame multiplicative decay.
pub const DEFAULT_FADE_FACTOR: f32 = 0.95;
/// Cells below this intensity are not painted.
pub const VISIBILITY_THRESHOLD: f32 = 0.01;

/// Simulation state for one overlay instance.
pub struct GridSim {
    field: TickField,
    pointer: PointerTracker,
    fade_factor: f32,
    viewport: Vec2,
}

impl GridSim {
    /// Build a sim covering the given viewport. `resolution` must be
    /// positive and `fade_factor` inside (0, 1); the settings layer clamps
    /// both before they reach here.
    pub fn new(viewport_w: f32, viewport_h: f32, resolution: f32, fade_factor: f32) -> Self {
        let field = TickField::new(viewport_w, viewport_h, resolution);
        debug!(
            "GridSim created: {}x{} cells at {}px, fade {}",
            field.cols(),
            field.rows(),
            resolution,
            fade_factor
        );
        Self {
            field,
            pointer: PointerTracker::new(),
            fade_factor,
            viewport: Vec2::new(viewport_w, viewport_h),
        }
    }

    /// Destructive viewport resize: the field is rebuilt zeroed, the pointer
    /// state survives.
    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32) {
        self.field.resize(viewport_w, viewport_h);
        self.viewport = Vec2::new(viewport_w, viewport_h);
        debug!(
            "GridSim resized: {}x{} cells",
            self.field.cols(),
            self.field.rows()
        );
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn fade_factor(&self) -> f32 {
        self.fade_factor
    }

    /// Pointer move event (absolute pixel coordinates).
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer.on_move(pos);
    }

    /// Pointer left the window.
    pub fn pointer_left(&mut self) {
        self.pointer.on_leave();
    }

    /// Start of the per-frame step: deposit the stroke covered since the
    /// previous frame (a single stamp when still), then advance the pointer.
    /// Inactive pointers deposit nothing.
    pub fn begin_frame(&mut self) {
        if self.pointer.is_active() {
            self.field
                .deposit_stroke(self.pointer.prev(), self.pointer.pos());
        }
        self.pointer.advance();
    }

    /// End of the per-frame step: decay every cell. Call after painting so
    /// the frame's visuals read pre-decay values.
    pub fn end_frame(&mut self) {
        self.field.fade(self.fade_factor);
    }

    /// Pre-decay field for the paint phase.
    pub fn field(&self) -> &TickField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Pause-glyph position and opacity while the pointer is active and not
    /// yet fully idle.
    pub fn cursor_glyph(&self) -> Option<(Vec2, f32)> {
        self.pointer
            .glyph_opacity()
            .map(|opacity| (self.pointer.pos(), opacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(sim: &mut GridSim) {
        sim.begin_frame();
        sim.end_frame();
    }

    #[test]
    fn test_end_to_end_scenario() {
        // 800x600 at resolution 20, fade 0.95 => 40x30 cells
        let mut sim = GridSim::new(800.0, 600.0, 20.0, 0.95);
        assert_eq!(sim.field().cols(), 40);
        assert_eq!(sim.field().rows(), 30);

        // Pointer enters at (100, 100): cell (5, 5)
        sim.pointer_moved(Vec2::new(100.0, 100.0));
        sim.begin_frame();
        assert!((sim.field().get(5, 5) - 0.8).abs() < 1e-6);
        sim.end_frame();

        // Held still for more frames: intensity keeps accumulating through
        // decay but never exceeds 1.0
        for _ in 0..10 {
            sim.begin_frame();
            assert!(sim.field().get(5, 5) <= 1.0);
            sim.end_frame();
        }
        assert!(sim.field().cells().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_inactive_pointer_deposits_nothing() {
        let mut sim = GridSim::new(800.0, 600.0, 20.0, 0.95);
        for _ in 0..5 {
            step(&mut sim);
        }
        assert!(sim.field().cells().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_leave_stops_deposits_and_decays() {
        let mut sim = GridSim::new(800.0, 600.0, 20.0, 0.95);
        sim.pointer_moved(Vec2::new(100.0, 100.0));
        step(&mut sim);
        let after_deposit = sim.field().get(5, 5);
        assert!(after_deposit > 0.0);

        sim.pointer_left();
        for _ in 0..10 {
            step(&mut sim);
        }
        // Pure decay from the post-deposit value: d * 0.95^10 where d already
        // includes the first frame's fade
        let expected = after_deposit * 0.95f32.powi(10);
        assert!((sim.field().get(5, 5) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_fast_motion_paints_the_whole_path() {
        let mut sim = GridSim::new(800.0, 600.0, 20.0, 0.95);
        sim.pointer_moved(Vec2::new(110.0, 110.0));
        step(&mut sim);

        // 100px jump in one frame
        sim.pointer_moved(Vec2::new(210.0, 110.0));
        sim.begin_frame();
        for col in 5..=10 {
            assert!(sim.field().get(col, 5) > 0.0, "cell ({}, 5) skipped", col);
        }
        sim.end_frame();
    }

    #[test]
    fn test_resize_zeroes_field_keeps_pointer() {
        let mut sim = GridSim::new(800.0, 600.0, 20.0, 0.95);
        sim.pointer_moved(Vec2::new(100.0, 100.0));
        step(&mut sim);
        assert!(sim.field().get(5, 5) > 0.0);

        sim.resize(400.0, 300.0);
        assert_eq!(sim.field().cols(), 20);
        assert_eq!(sim.field().rows(), 15);
        assert!(sim.field().cells().iter().all(|&v| v == 0.0));
        assert!(sim.pointer().is_active());
    }

    #[test]
    fn test_glyph_follows_pointer_and_fades() {
        let mut sim = GridSim::new(800.0, 600.0, 20.0, 0.95);
        assert!(sim.cursor_glyph().is_none());

        sim.pointer_moved(Vec2::new(100.0, 100.0));
        let (pos, opacity) = sim.cursor_glyph().unwrap();
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert_eq!(opacity, 1.0);

        // One second of stillness at 60fps hides the glyph
        for _ in 0..60 {
            step(&mut sim);
        }
        assert!(sim.cursor_glyph().is_none());

        // Movement brings it back at full opacity once the frame's idle
        // detection has run
        sim.pointer_moved(Vec2::new(105.0, 100.0));
        sim.begin_frame();
        let (_, opacity) = sim.cursor_glyph().unwrap();
        assert_eq!(opacity, 1.0);
        sim.end_frame();
    }

    #[test]
    fn test_decay_crosses_visibility_threshold() {
        let mut sim = GridSim::new(800.0, 600.0, 20.0, 0.95);
        sim.pointer_moved(Vec2::new(100.0, 100.0));
        step(&mut sim);
        sim.pointer_left();

        // 0.8 * 0.95^n < 0.01 needs n >= 86
        let mut frames = 0;
        while sim.field().get(5, 5) >= VISIBILITY_THRESHOLD {
            step(&mut sim);
            frames += 1;
            assert!(frames < 200, "cell never decayed below threshold");
        }
        assert!(frames > 50);
    }
}
