use crate::model::{Bounds, GraphOrientation, Vec2};

/// The coordinate space all on-graph vectors are clamped to. Fixed per scene.
#[derive(Clone, Copy, Debug)]
pub struct Graph {
    bounds: Bounds,
    orientation: GraphOrientation,
}

impl Graph {
    /// Builds a graph, normalizing flipped bounds from a bad config.
    pub fn new(bounds: Bounds, orientation: GraphOrientation) -> Graph {
        let b = Bounds::new(
            bounds.min_x.min(bounds.max_x),
            bounds.min_y.min(bounds.max_y),
            bounds.min_x.max(bounds.max_x),
            bounds.min_y.max(bounds.max_y),
        );
        Graph { bounds: b, orientation }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn orientation(&self) -> GraphOrientation {
        self.orientation
    }

    /// Zeroes the component the orientation forbids.
    pub fn constrain_components(&self, c: Vec2) -> Vec2 {
        match self.orientation {
            GraphOrientation::Horizontal => Vec2::new(c.x, 0.0),
            GraphOrientation::Vertical => Vec2::new(0.0, c.y),
            GraphOrientation::TwoDimensional => c,
        }
    }

    /// The rectangle a tail may occupy so that both tail and tail + components
    /// stay inside bounds. Components of an on-graph vector never exceed the
    /// graph size, so the intersection is non-empty; the full bounds are the
    /// fallback if a caller hands in oversized components anyway.
    pub fn tail_region(&self, components: Vec2) -> Bounds {
        match self.bounds.intersect(&self.bounds.shifted(-components)) {
            Some(region) => region,
            None => self.bounds,
        }
    }
}
