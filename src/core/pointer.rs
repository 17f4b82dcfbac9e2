//! Pointer tracking: last two positions, activity flag and idle counting.
//!
//! Move events only record state; deposits happen in the frame step, which
//! reads the previous/current pair and then advances it. Idle detection runs
//! off the same pair: sub-pixel movement for consecutive frames grows the
//! idle counter, which drives the fading pause glyph.

use glam::Vec2;

/// Frames of stillness after which the pause glyph is fully faded out.
pub const IDLE_FADE_FRAMES: u32 = 60;
/// Per-axis movement below this many pixels counts as standing still.
const IDLE_EPSILON: f32 = 0.1;

/// Pointer state fed by move/gone events and advanced once per frame.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    pos: Vec2,
    prev: Vec2,
    /// True once a move event has been seen, false after pointer-gone.
    active: bool,
    /// Consecutive frames with sub-pixel movement.
    idle_frames: u32,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            prev: Vec2::ZERO,
            active: false,
            idle_frames: 0,
        }
    }

    /// Record a move event and activate the pointer. While inactive the
    /// previous position snaps to `pos`, so entering the window never smears
    /// a stroke from the last retained position.
    pub fn on_move(&mut self, pos: Vec2) {
        if !self.active {
            self.prev = pos;
        }
        self.pos = pos;
        self.active = true;
    }

    /// Record a pointer-gone event. The position is retained but deposits
    /// stop until the next move event.
    pub fn on_leave(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn prev(&self) -> Vec2 {
        self.prev
    }

    pub fn idle_frames(&self) -> u32 {
        self.idle_frames
    }

    /// End-of-frame bookkeeping: update the idle counter from this frame's
    /// movement delta, then store the current position as previous.
    pub fn advance(&mut self) {
        let delta = self.pos - self.prev;
        if delta.x.abs() > IDLE_EPSILON || delta.y.abs() > IDLE_EPSILON {
            self.idle_frames = 0;
        } else {
            self.idle_frames = self.idle_frames.saturating_add(1);
        }
        self.prev = self.pos;
    }

    /// Pause-glyph opacity, fading linearly 1 -> 0 across the idle window.
    /// None while the pointer is inactive or fully idle.
    pub fn glyph_opacity(&self) -> Option<f32> {
        if self.active && self.idle_frames < IDLE_FADE_FRAMES {
            Some(1.0 - self.idle_frames as f32 / IDLE_FADE_FRAMES as f32)
        } else {
            None
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
