use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned rectangle in model units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

/// Which axes a vector on this graph may occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphOrientation {
    Horizontal,
    Vertical,
    TwoDimensional,
}

/// How candidate positions are quantized during interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapMode {
    Cartesian,
    Polar,
}

/// Rendering selector for derived x/y component arrows. Carries no state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStyle {
    Invisible,
    Triangle,
    Parallelogram,
    OnAxes,
}

/// Shared fill/stroke pairs for one vector set. Immutable after scene setup.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub main_fill: Color,
    pub main_stroke: Color,
    pub component_fill: Color,
    pub sum_fill: Color,
    pub sum_stroke: Color,
}

/// One derived component arrow, both endpoints inside graph bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentArrow {
    pub tail: Vec2,
    pub tip: Vec2,
}
