use super::tolerance::{clamp, clamp01, EPS_LEN};
use crate::model::{Bounds, Vec2};
use std::ops::{Add, Mul, Neg, Sub};

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Direction in radians, `None` for a vector shorter than the zero-length
    /// threshold (angle is undefined there).
    pub fn angle(&self) -> Option<f32> {
        if self.magnitude() <= EPS_LEN {
            None
        } else {
            Some(self.y.atan2(self.x))
        }
    }

    #[inline]
    pub fn from_polar(magnitude: f32, angle: f32) -> Vec2 {
        Vec2::new(magnitude * angle.cos(), magnitude * angle.sin())
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Bounds {
        Bounds { min_x, min_y, max_x, max_y }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }

    pub fn contains(&self, p: Vec2, eps: f32) -> bool {
        p.x >= self.min_x - eps
            && p.x <= self.max_x + eps
            && p.y >= self.min_y - eps
            && p.y <= self.max_y + eps
    }

    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(clamp(p.x, self.min_x, self.max_x), clamp(p.y, self.min_y, self.max_y))
    }

    /// The same rectangle translated by `d`. Used to derive the region a tail
    /// may occupy so that tail + components stays inside the original bounds.
    pub fn shifted(&self, d: Vec2) -> Bounds {
        Bounds::new(self.min_x + d.x, self.min_y + d.y, self.max_x + d.x, self.max_y + d.y)
    }

    /// Intersection, or `None` when the rectangles do not overlap.
    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        let b = Bounds::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        );
        if b.min_x <= b.max_x && b.min_y <= b.max_y {
            Some(b)
        } else {
            None
        }
    }
}

#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Quadratic ease-in-out over t in [0, 1].
pub fn ease_in_out(t: f32) -> f32 {
    let t = clamp01(t);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * 0.5
    }
}
