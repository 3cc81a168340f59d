//! Derivation of the x/y component arrows for one vector.
//!
//! Pure and stateless: the style tag picks where the two arrows sit, the
//! vector itself is never touched.

use crate::geometry::tolerance::clamp;
use crate::graph::Graph;
use crate::model::{ComponentArrow, ComponentStyle, Vec2};

/// The (x-arrow, y-arrow) pair for a vector at `tail` with `components`, or
/// `None` when the style hides them. Tail and tip are assumed inside the
/// graph; every derived endpoint then also lands inside because the bounds
/// are axis-aligned, except the on-axes style whose axis lines are clamped
/// into the bounds.
pub fn component_arrows(
    graph: &Graph,
    style: ComponentStyle,
    tail: Vec2,
    components: Vec2,
) -> Option<(ComponentArrow, ComponentArrow)> {
    let tip = tail + components;
    match style {
        ComponentStyle::Invisible => None,
        ComponentStyle::Triangle => {
            let corner = Vec2::new(tip.x, tail.y);
            Some((
                ComponentArrow { tail, tip: corner },
                ComponentArrow { tail: corner, tip },
            ))
        }
        ComponentStyle::Parallelogram => Some((
            ComponentArrow { tail, tip: Vec2::new(tip.x, tail.y) },
            ComponentArrow { tail, tip: Vec2::new(tail.x, tip.y) },
        )),
        ComponentStyle::OnAxes => {
            let b = graph.bounds();
            let y_axis_line = clamp(0.0, b.min_y, b.max_y);
            let x_axis_line = clamp(0.0, b.min_x, b.max_x);
            Some((
                ComponentArrow {
                    tail: Vec2::new(tail.x, y_axis_line),
                    tip: Vec2::new(tip.x, y_axis_line),
                },
                ComponentArrow {
                    tail: Vec2::new(x_axis_line, tail.y),
                    tip: Vec2::new(x_axis_line, tip.y),
                },
            ))
        }
    }
}
