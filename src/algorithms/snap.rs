//! Candidate-position quantization.
//!
//! Both entry points run the same pipeline: project for the graph
//! orientation, clamp the unquantized candidate into the legal region,
//! quantize, then re-check the quantized point against the region so
//! quantization can never push a point out of bounds.

use crate::geometry::tolerance::{clamp, EPS_LEN, EPS_POS};
use crate::graph::Graph;
use crate::model::{SnapMode, Vec2};

/// Nearest integer within [lo, hi], or the clamped raw value when the
/// interval holds no integer at all.
fn grid_coord(v: f32, lo: f32, hi: f32) -> f32 {
    let qlo = (lo - EPS_POS).ceil();
    let qhi = (hi + EPS_POS).floor();
    if qlo > qhi {
        return clamp(v, lo, hi);
    }
    clamp(v.round(), qlo, qhi)
}

/// Angle rounded to the nearest multiple of `increment` radians.
fn quantize_angle(angle: f32, increment: f32) -> f32 {
    if increment <= 0.0 {
        return angle;
    }
    (angle / increment).round() * increment
}

/// Where a dragged tail lands: inside the region keeping tail and tip on the
/// graph, on the integer grid. Components ride along unchanged, so the grid
/// applies in both snap modes.
pub fn snap_tail(graph: &Graph, components: Vec2, candidate: Vec2) -> Vec2 {
    let region = graph.tail_region(components);
    let clamped = region.clamp_point(candidate);
    Vec2::new(
        grid_coord(clamped.x, region.min_x, region.max_x),
        grid_coord(clamped.y, region.min_y, region.max_y),
    )
}

/// Components produced by dragging the tip toward `candidate_tip`.
///
/// Cartesian rounds the tip to the integer grid per axis. Polar rounds the
/// magnitude to the nearest whole unit and the angle to the nearest
/// `angle_increment`, then shortens the magnitude a unit at a time if the
/// reconstructed tip would leave the graph.
pub fn snap_components(
    graph: &Graph,
    mode: SnapMode,
    angle_increment: f32,
    tail: Vec2,
    candidate_tip: Vec2,
) -> Vec2 {
    let bounds = graph.bounds();
    let projected = graph.constrain_components(candidate_tip - tail);
    let clamped_tip = bounds.clamp_point(tail + projected);
    match mode {
        SnapMode::Cartesian => {
            let tip = Vec2::new(
                grid_coord(clamped_tip.x, bounds.min_x, bounds.max_x),
                grid_coord(clamped_tip.y, bounds.min_y, bounds.max_y),
            );
            tip - tail
        }
        SnapMode::Polar => {
            let rel = clamped_tip - tail;
            if rel.magnitude() <= EPS_LEN {
                return Vec2::ZERO;
            }
            let angle = match rel.angle() {
                Some(a) => quantize_angle(a, angle_increment),
                None => return Vec2::ZERO,
            };
            let mut magnitude = rel.magnitude().round();
            while magnitude > 0.0 {
                let c = Vec2::from_polar(magnitude, angle);
                if bounds.contains(tail + c, EPS_POS) {
                    return c;
                }
                magnitude -= 1.0;
            }
            Vec2::ZERO
        }
    }
}
