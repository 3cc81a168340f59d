// Centralized tolerances for robust snapping and invariant checks

pub const EPS_POS: f32 = 1e-4;        // point coincidence threshold (model units)
pub const EPS_LEN: f32 = 1e-6;        // zero-length vector threshold
pub const EPS_ANG: f32 = 1e-6;        // angle compare slack (radians)
pub const EPS_SUM: f32 = 1e-3;        // resultant summation slack for tests/invariants

#[inline] pub fn clamp01(x: f32) -> f32 { x.max(0.0).min(1.0) }
#[inline] pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 { x.max(lo).min(hi) }
#[inline] pub fn near_zero(x: f32, eps: f32) -> bool { x.abs() <= eps }
#[inline] pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }
