pub mod model;
pub mod observe;
pub mod geometry {
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod components;
    pub mod snap;
}
pub mod graph;
pub mod animation;
pub mod vector;
pub mod vector_set;
mod json;

use graph::Graph;
use model::{Bounds, Color, ColorPalette, ComponentStyle, GraphOrientation, SnapMode, Vec2};
use observe::Property;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use vector::{Selection, Vector};
use vector_set::VectorSet;

/// One toolbox slot: where the vector rests, what it is labelled, and the
/// components it is seeded with when dragged onto the graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SlotConfig {
    pub home: Vec2,
    pub placement_components: Vec2,
    pub symbol: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VectorSetConfig {
    pub palette: ColorPalette,
    pub resultant_visible: bool,
    pub slots: Vec<SlotConfig>,
}

/// Everything fixed at scene construction. Runtime state (vector geometry,
/// membership, selection) lives in the scene itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneConfig {
    pub bounds: Bounds,
    pub orientation: GraphOrientation,
    pub snap_mode: SnapMode,
    pub polar_angle_increment_deg: f32,
    pub component_style: ComponentStyle,
    pub sets: Vec<VectorSetConfig>,
}

impl Default for SceneConfig {
    fn default() -> SceneConfig {
        let palette = ColorPalette {
            main_fill: Color { r: 10, g: 130, b: 250, a: 255 },
            main_stroke: Color { r: 0, g: 60, b: 160, a: 255 },
            component_fill: Color { r: 155, g: 200, b: 250, a: 255 },
            sum_fill: Color { r: 4, g: 143, b: 0, a: 255 },
            sum_stroke: Color { r: 2, g: 90, b: 0, a: 255 },
        };
        let slots = ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, symbol)| SlotConfig {
                home: Vec2::new(50.0, 18.0 - 3.0 * i as f32),
                placement_components: Vec2::new(5.0, 5.0),
                symbol: Some((*symbol).to_string()),
            })
            .collect();
        SceneConfig {
            bounds: Bounds::new(-5.0, -5.0, 45.0, 25.0),
            orientation: GraphOrientation::TwoDimensional,
            snap_mode: SnapMode::Cartesian,
            polar_angle_increment_deg: 5.0,
            component_style: ComponentStyle::Invisible,
            sets: vec![VectorSetConfig { palette, resultant_visible: true, slots }],
        }
    }
}

// Shared per-scene state every vector needs a handle on.
pub(crate) struct SceneContext {
    pub(crate) graph: Graph,
    pub(crate) snap_mode: Property<SnapMode>,
    pub(crate) component_style: Property<ComponentStyle>,
    pub(crate) polar_angle_increment: f32,
    pub(crate) selection: Selection,
}

/// One interactive scene: a graph, its vector sets, the snap mode and the
/// component style. All mutation goes through vector, set or scene methods;
/// everything observable is exposed as a read-only [`Property`].
pub struct Scene {
    ctx: Rc<SceneContext>,
    sets: Vec<VectorSet>,
    initial_snap_mode: SnapMode,
    initial_component_style: ComponentStyle,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Scene {
        let increment_deg = if config.polar_angle_increment_deg.is_finite()
            && config.polar_angle_increment_deg > 0.0
        {
            config.polar_angle_increment_deg
        } else {
            5.0
        };
        let ctx = Rc::new(SceneContext {
            graph: Graph::new(config.bounds, config.orientation),
            snap_mode: Property::new(config.snap_mode),
            component_style: Property::new(config.component_style),
            polar_angle_increment: increment_deg.to_radians(),
            selection: Selection::new(),
        });
        let sets = config.sets.iter().map(|s| VectorSet::new(ctx.clone(), s)).collect();
        Scene {
            ctx,
            sets,
            initial_snap_mode: config.snap_mode,
            initial_component_style: config.component_style,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.ctx.graph
    }

    pub fn snap_mode(&self) -> &Property<SnapMode> {
        &self.ctx.snap_mode
    }

    /// Affects subsequent interactions only; vectors already on the graph
    /// keep their positions until next touched.
    pub fn set_snap_mode(&self, mode: SnapMode) {
        self.ctx.snap_mode.set(mode);
    }

    pub fn component_style(&self) -> &Property<ComponentStyle> {
        &self.ctx.component_style
    }

    pub fn set_component_style(&self, style: ComponentStyle) {
        self.ctx.component_style.set(style);
    }

    /// Polar angle quantum in radians.
    pub fn polar_angle_increment(&self) -> f32 {
        self.ctx.polar_angle_increment
    }

    pub fn sets(&self) -> &[VectorSet] {
        &self.sets
    }

    pub fn set(&self, index: usize) -> Option<&VectorSet> {
        self.sets.get(index)
    }

    pub fn vector(&self, set: usize, slot: usize) -> Option<&Rc<Vector>> {
        self.sets.get(set).and_then(|s| s.vector(slot))
    }

    pub fn on_graph_total(&self) -> usize {
        self.sets.iter().map(|s| s.on_graph_count().get()).sum()
    }

    pub fn clear_selection(&self) {
        self.ctx.selection.clear();
    }

    /// Advances every in-flight return animation by `dt` seconds. The caller
    /// owns the clock; a non-positive or non-finite delta is rejected.
    pub fn step(&self, dt: f32) -> bool {
        if !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        for s in &self.sets {
            s.step(dt);
        }
        true
    }

    /// Everything back to the initial state: vectors to their slots, modes
    /// to their configured defaults, selection cleared.
    pub fn reset(&self) {
        self.ctx.selection.clear();
        for s in &self.sets {
            s.reset();
        }
        self.ctx.snap_mode.set(self.initial_snap_mode);
        self.ctx.component_style.set(self.initial_component_style);
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }

    pub fn from_json_value(&self, v: serde_json::Value) -> bool {
        json::from_json_impl(self, v)
    }

    pub fn from_json_value_strict(
        &self,
        v: serde_json::Value,
    ) -> Result<bool, (&'static str, String)> {
        json::from_json_impl_strict(self, v)
    }
}
