//! Toolbox-return animation, driven by an external per-frame clock.
//!
//! Nothing here owns a timer. The scene feeds elapsed seconds into
//! [`crate::Scene::step`], which advances each in-flight animation one
//! bounded interpolation step at a time.

use crate::geometry::math::{ease_in_out, lerp};
use crate::model::Vec2;

/// Seconds a vector takes to glide from the graph back to its slot.
pub const RETURN_DURATION: f32 = 0.7;

#[derive(Clone, Copy, Debug)]
pub struct ReturnAnimation {
    from: Vec2,
    to: Vec2,
    duration: f32,
    elapsed: f32,
}

impl ReturnAnimation {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> ReturnAnimation {
        let duration = if duration.is_finite() && duration > 0.0 { duration } else { RETURN_DURATION };
        ReturnAnimation { from, to, duration, elapsed: 0.0 }
    }

    /// Advances by `dt` seconds. Returns the eased position and whether the
    /// animation just finished; the final position is exactly `to`.
    pub fn advance(&mut self, dt: f32) -> (Vec2, bool) {
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            return (self.to, true);
        }
        let t = ease_in_out(self.elapsed / self.duration);
        (lerp(self.from, self.to, t), false)
    }
}
