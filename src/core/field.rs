//! Decaying intensity field behind the tick-grid overlay.
//!
//! A flat row-major grid of per-cell intensities in [0, 1]. Pointer strokes
//! deposit a soft 3x3 brush along the motion path; every frame the whole
//! field is multiplied by a fade factor so intensity decays back to rest.
//!
//! # Resize
//!
//! Resizes are destructive: the grid is reallocated zero-filled and prior
//! intensity is dropped. No remapping onto the new cell layout.
//!
//! # Deposit
//!
//! Fast pointer motion is sampled at half-cell intervals along the segment
//! between the previous and current position, so no cell on the path is
//! skipped even on a large single-frame jump.

use glam::Vec2;

/// Brush radius in cells (3x3 neighborhood around the path sample).
const BRUSH_RADIUS: i32 = 1;
/// Intensity added at the brush center per path sample.
const DEPOSIT_STRENGTH: f32 = 0.8;

/// Row-major intensity grid covering the viewport.
#[derive(Clone, Debug)]
pub struct TickField {
    /// Cell intensities in [0, 1], indexed `col + row * cols`.
    cells: Vec<f32>,
    cols: usize,
    rows: usize,
    /// Cell edge length in pixels.
    resolution: f32,
}

impl TickField {
    /// Create a zeroed field covering `viewport_w` x `viewport_h` pixels.
    pub fn new(viewport_w: f32, viewport_h: f32, resolution: f32) -> Self {
        let mut field = Self {
            cells: Vec::new(),
            cols: 0,
            rows: 0,
            resolution,
        };
        field.resize(viewport_w, viewport_h);
        field
    }

    /// Destructive resize: reallocates a zero grid sized
    /// `ceil(w/resolution) x ceil(h/resolution)`, prior intensity is dropped.
    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32) {
        self.cols = (viewport_w / self.resolution).ceil().max(0.0) as usize;
        self.rows = (viewport_h / self.resolution).ceil().max(0.0) as usize;
        self.cells = vec![0.0; self.cols * self.rows];
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Intensity at (col, row). Out-of-range reads return 0.0.
    pub fn get(&self, col: usize, row: usize) -> f32 {
        if col < self.cols && row < self.rows {
            self.cells[col + row * self.cols]
        } else {
            0.0
        }
    }

    /// All cell intensities, row-major.
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    /// Stamp the soft brush into the cells around `pos` (pixel coordinates).
    ///
    /// Cells gain `0.8 * (1 - d)` where `d` is the Euclidean cell distance
    /// from the sample's cell, clamped at 1.0. Cells with `d > 1` (the 3x3
    /// corners) and cells outside the grid are skipped.
    pub fn stamp(&mut self, pos: Vec2) {
        let col = (pos.x / self.resolution).floor() as i64;
        let row = (pos.y / self.resolution).floor() as i64;

        for i in -BRUSH_RADIUS..=BRUSH_RADIUS {
            for j in -BRUSH_RADIUS..=BRUSH_RADIUS {
                let c = col + i as i64;
                let r = row + j as i64;
                if c < 0 || r < 0 || c >= self.cols as i64 || r >= self.rows as i64 {
                    continue;
                }
                let d = ((i * i + j * j) as f32).sqrt();
                if d > BRUSH_RADIUS as f32 {
                    continue;
                }
                let idx = c as usize + r as usize * self.cols;
                let gain = DEPOSIT_STRENGTH * (1.0 - d / BRUSH_RADIUS as f32);
                self.cells[idx] = (self.cells[idx] + gain).min(1.0);
            }
        }
    }

    /// Deposit a stroke from `from` to `to`, stamping the brush at
    /// `ceil(distance / (resolution/2)) + 1` points along the segment.
    /// Zero movement still stamps once at the current point.
    pub fn deposit_stroke(&mut self, from: Vec2, to: Vec2) {
        let dist = from.distance(to);
        let steps = (dist / (self.resolution / 2.0)).ceil() as u32;

        for s in 0..=steps {
            let t = if steps > 0 { s as f32 / steps as f32 } else { 0.0 };
            self.stamp(from.lerp(to, t));
        }
    }

    /// Multiply every cell by `fade_factor`. Called exactly once per frame,
    /// after the frame's visual read of the field.
    pub fn fade(&mut self, fade_factor: f32) {
        for cell in &mut self.cells {
            *cell *= fade_factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_dimensions() {
        // 800x600 at resolution 20 => 40x30 cells
        let field = TickField::new(800.0, 600.0, 20.0);
        assert_eq!(field.cols(), 40);
        assert_eq!(field.rows(), 30);
        assert_eq!(field.cells().len(), 40 * 30);
    }

    #[test]
    fn test_resize_rounds_up() {
        // 801x601 needs one extra column and row
        let field = TickField::new(801.0, 601.0, 20.0);
        assert_eq!(field.cols(), 41);
        assert_eq!(field.rows(), 31);
    }

    #[test]
    fn test_resize_is_destructive() {
        let mut field = TickField::new(800.0, 600.0, 20.0);
        field.stamp(Vec2::new(100.0, 100.0));
        assert!(field.cells().iter().any(|&v| v > 0.0));

        field.resize(400.0, 300.0);
        assert_eq!(field.cols(), 20);
        assert_eq!(field.rows(), 15);
        assert!(field.cells().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_stamp_center_and_neighbors() {
        let mut field = TickField::new(800.0, 600.0, 20.0);
        // Point (100, 100) lands in cell (5, 5)
        field.stamp(Vec2::new(100.0, 100.0));

        // Center cell gets the full strength
        assert!((field.get(5, 5) - 0.8).abs() < 1e-6);
        // Edge neighbors are at d=1, gain 0
        assert_eq!(field.get(6, 5), 0.0);
        assert_eq!(field.get(5, 4), 0.0);
        // Diagonal neighbors are at d=sqrt(2) > radius, skipped
        assert_eq!(field.get(6, 6), 0.0);
    }

    #[test]
    fn test_stamp_clamps_at_one() {
        let mut field = TickField::new(800.0, 600.0, 20.0);
        for _ in 0..100 {
            field.stamp(Vec2::new(100.0, 100.0));
        }
        assert!(field.get(5, 5) <= 1.0);
        assert!((field.get(5, 5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_stamp_outside_grid_is_safe() {
        let mut field = TickField::new(800.0, 600.0, 20.0);
        field.stamp(Vec2::new(-50.0, -50.0));
        field.stamp(Vec2::new(10_000.0, 10_000.0));
        // Near-corner stamp deposits only into in-range cells
        field.stamp(Vec2::new(5.0, 5.0));
        assert!((field.get(0, 0) - 0.8).abs() < 1e-6);
        assert!(field.cells().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_stroke_covers_fast_motion() {
        let mut field = TickField::new(800.0, 600.0, 20.0);
        // 200px horizontal jump in one frame: every cell along row 5
        // between the endpoints must receive intensity.
        field.deposit_stroke(Vec2::new(110.0, 110.0), Vec2::new(310.0, 110.0));
        for col in 5..=15 {
            assert!(
                field.get(col, 5) > 0.0,
                "cell ({}, 5) skipped during fast motion",
                col
            );
        }
    }

    #[test]
    fn test_stroke_zero_distance_stamps_once() {
        let mut field = TickField::new(800.0, 600.0, 20.0);
        let p = Vec2::new(100.0, 100.0);
        field.deposit_stroke(p, p);
        assert!((field.get(5, 5) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_fade_law() {
        let mut field = TickField::new(800.0, 600.0, 20.0);
        field.stamp(Vec2::new(100.0, 100.0));
        let initial = field.get(5, 5);

        for _ in 0..10 {
            field.fade(0.95);
        }
        let expected = initial * 0.95f32.powi(10);
        assert!((field.get(5, 5) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_fade_drops_below_visibility_threshold() {
        let mut field = TickField::new(800.0, 600.0, 20.0);
        field.stamp(Vec2::new(100.0, 100.0));

        // 0.8 * 0.95^n < 0.01 after ~86 frames
        for _ in 0..120 {
            field.fade(0.95);
        }
        assert!(field.get(5, 5) < 0.01);
    }

    #[test]
    fn test_bounds_invariant_under_load() {
        let mut field = TickField::new(800.0, 600.0, 20.0);
        // Dense strokes criss-crossing the grid, faded occasionally
        for n in 0..50 {
            let from = Vec2::new((n * 13 % 800) as f32, (n * 29 % 600) as f32);
            let to = Vec2::new((n * 31 % 800) as f32, (n * 7 % 600) as f32);
            field.deposit_stroke(from, to);
            if n % 5 == 0 {
                field.fade(0.95);
            }
        }
        assert!(field.cells().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}
