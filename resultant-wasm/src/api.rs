use crate::error;
use crate::Scene;
use js_sys::Uint32Array;
use resultant::model::{ComponentStyle, SnapMode, Vec2};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Seconds a toolbox return takes; the host clock drives it through `step`.
#[wasm_bindgen]
pub fn return_duration() -> f32 {
    resultant::animation::RETURN_DURATION
}

#[wasm_bindgen]
impl Scene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Scene {
        crate::Scene::rs_new(&resultant::SceneConfig::default())
    }
    pub fn with_config(config: JsValue) -> Option<Scene> {
        match serde_wasm_bindgen::from_value::<resultant::SceneConfig>(config) {
            Ok(cfg) => Some(crate::Scene::rs_new(&cfg)),
            Err(e) => {
                crate::interop::warn(&format!("scene config rejected: {}", e));
                None
            }
        }
    }
    pub fn revision(&self) -> u64 {
        self.rs_revision()
    }

    // Graph shape + interaction modes
    pub fn bounds(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.graph().bounds()).unwrap()
    }
    pub fn orientation(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.graph().orientation()).unwrap()
    }
    pub fn snap_mode(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snap_mode().get()).unwrap()
    }
    pub fn set_snap_mode(&self, mode: &str) -> bool {
        match parse_snap_mode(mode) {
            Some(m) => {
                self.inner.set_snap_mode(m);
                true
            }
            None => false,
        }
    }
    pub fn set_snap_mode_res(&self, mode: &str) -> JsValue {
        match parse_snap_mode(mode) {
            Some(m) => {
                self.inner.set_snap_mode(m);
                error::ok(JsValue::from_bool(true))
            }
            None => error::invalid_mode(mode),
        }
    }
    pub fn component_style(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.component_style().get()).unwrap()
    }
    pub fn set_component_style(&self, style: &str) -> bool {
        match parse_component_style(style) {
            Some(s) => {
                self.inner.set_component_style(s);
                true
            }
            None => false,
        }
    }
    pub fn set_component_style_res(&self, style: &str) -> JsValue {
        match parse_component_style(style) {
            Some(s) => {
                self.inner.set_component_style(s);
                error::ok(JsValue::from_bool(true))
            }
            None => error::invalid_style(style),
        }
    }
    pub fn polar_angle_increment_degrees(&self) -> f32 {
        self.inner.polar_angle_increment().to_degrees()
    }

    // Sets and slots
    pub fn set_count(&self) -> u32 {
        self.inner.sets().len() as u32
    }
    pub fn slot_count(&self, set: u32) -> u32 {
        set_of(&self.inner, set).map_or(0, |s| s.vectors().len() as u32)
    }
    pub fn symbol(&self, set: u32, slot: u32) -> Option<String> {
        vector_of(&self.inner, set, slot).and_then(|v| v.symbol().map(|s| s.to_string()))
    }
    pub fn on_graph_count(&self, set: u32) -> u32 {
        set_of(&self.inner, set).map_or(0, |s| s.on_graph_count().get() as u32)
    }
    pub fn on_graph_total(&self) -> u32 {
        self.inner.on_graph_total() as u32
    }
    pub fn palette(&self, set: u32) -> JsValue {
        match set_of(&self.inner, set) {
            Some(s) => serde_wasm_bindgen::to_value(s.palette()).unwrap(),
            None => JsValue::NULL,
        }
    }

    // Per-vector state snapshots
    pub fn vector_state(&self, set: u32, slot: u32) -> JsValue {
        match vector_of(&self.inner, set, slot) {
            Some(v) => vector_json(v),
            None => JsValue::NULL,
        }
    }
    pub fn vector_state_res(&self, set: u32, slot: u32) -> JsValue {
        if set_of(&self.inner, set).is_none() {
            return error::invalid_id("set", set);
        }
        match vector_of(&self.inner, set, slot) {
            Some(v) => error::ok(vector_json(v)),
            None => error::invalid_id("slot", slot),
        }
    }
    pub fn resultant_state(&self, set: u32) -> JsValue {
        match set_of(&self.inner, set) {
            Some(s) => resultant_json(s.resultant()),
            None => JsValue::NULL,
        }
    }
    pub fn resultant_state_res(&self, set: u32) -> JsValue {
        match set_of(&self.inner, set) {
            Some(s) => error::ok(resultant_json(s.resultant())),
            None => error::invalid_id("set", set),
        }
    }
    pub fn component_arrows(&self, set: u32, slot: u32) -> JsValue {
        match vector_of(&self.inner, set, slot).and_then(|v| v.component_arrows()) {
            Some((x, y)) => serde_wasm_bindgen::to_value(&vec![x, y]).unwrap(),
            None => JsValue::NULL,
        }
    }
    pub fn resultant_component_arrows(&self, set: u32) -> JsValue {
        match set_of(&self.inner, set).and_then(|s| s.resultant().component_arrows()) {
            Some((x, y)) => serde_wasm_bindgen::to_value(&vec![x, y]).unwrap(),
            None => JsValue::NULL,
        }
    }

    // Typed array getters
    pub fn active_slots(&self, set: u32) -> Uint32Array {
        let slots: Vec<u32> = set_of(&self.inner, set)
            .map(|s| s.active_vectors().iter().map(|v| v.slot() as u32).collect())
            .unwrap_or_default();
        crate::interop::arr_u32(&slots)
    }
    pub fn get_active_data(&self, set: u32) -> JsValue {
        let mut slots = Vec::new();
        let mut tails = Vec::new();
        let mut components = Vec::new();
        let mut selected = Vec::new();
        if let Some(s) = set_of(&self.inner, set) {
            for v in s.active_vectors() {
                slots.push(v.slot() as u32);
                let t = v.tail().get();
                tails.push(t.x);
                tails.push(t.y);
                let c = v.components().get();
                components.push(c.x);
                components.push(c.y);
                selected.push(v.is_selected().get() as u8);
            }
        }
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "slots", &crate::interop::arr_u32(&slots).into());
        crate::interop::set_kv(&obj, "tails", &crate::interop::arr_f32(&tails).into());
        crate::interop::set_kv(&obj, "components", &crate::interop::arr_f32(&components).into());
        crate::interop::set_kv(&obj, "selected", &crate::interop::arr_u8(&selected).into());
        obj.into()
    }

    // Toolbox lifecycle
    pub fn place_on_graph(&self, set: u32, slot: u32, x: f32, y: f32) -> bool {
        vector_of(&self.inner, set, slot).map_or(false, |v| v.place_on_graph(Vec2::new(x, y)))
    }
    pub fn place_on_graph_res(&self, set: u32, slot: u32, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if set_of(&self.inner, set).is_none() {
            return error::invalid_id("set", set);
        }
        let v = match vector_of(&self.inner, set, slot) {
            Some(v) => v,
            None => return error::invalid_id("slot", slot),
        };
        if v.is_returning() {
            return error::animating(slot);
        }
        if v.is_on_graph().get() {
            return error::already_on_graph(slot);
        }
        error::ok(JsValue::from_bool(v.place_on_graph(Vec2::new(x, y))))
    }
    pub fn pop_off_graph(&self, set: u32, slot: u32) -> bool {
        vector_of(&self.inner, set, slot).map_or(false, |v| v.pop_off_graph())
    }
    pub fn pop_off_graph_res(&self, set: u32, slot: u32) -> JsValue {
        if set_of(&self.inner, set).is_none() {
            return error::invalid_id("set", set);
        }
        let v = match vector_of(&self.inner, set, slot) {
            Some(v) => v,
            None => return error::invalid_id("slot", slot),
        };
        if !v.is_on_graph().get() {
            return error::not_on_graph(slot);
        }
        error::ok(JsValue::from_bool(v.pop_off_graph()))
    }
    pub fn return_to_toolbox(&self, set: u32, slot: u32) -> bool {
        vector_of(&self.inner, set, slot).map_or(false, |v| v.return_to_toolbox())
    }
    pub fn return_to_toolbox_res(&self, set: u32, slot: u32) -> JsValue {
        if set_of(&self.inner, set).is_none() {
            return error::invalid_id("set", set);
        }
        match vector_of(&self.inner, set, slot) {
            Some(v) => error::ok(JsValue::from_bool(v.return_to_toolbox())),
            None => error::invalid_id("slot", slot),
        }
    }

    // Dragging
    pub fn move_tip_to(&self, set: u32, slot: u32, x: f32, y: f32) -> bool {
        vector_of(&self.inner, set, slot).map_or(false, |v| v.move_tip_to(Vec2::new(x, y)))
    }
    pub fn move_tip_to_res(&self, set: u32, slot: u32, x: f32, y: f32) -> JsValue {
        match drag_guard(&self.inner, set, slot, x, y) {
            Ok(v) => error::ok(JsValue::from_bool(v.move_tip_to(Vec2::new(x, y)))),
            Err(e) => e,
        }
    }
    pub fn move_tail_to(&self, set: u32, slot: u32, x: f32, y: f32) -> bool {
        vector_of(&self.inner, set, slot).map_or(false, |v| v.move_tail_to(Vec2::new(x, y)))
    }
    pub fn move_tail_to_res(&self, set: u32, slot: u32, x: f32, y: f32) -> JsValue {
        match drag_guard(&self.inner, set, slot, x, y) {
            Ok(v) => error::ok(JsValue::from_bool(v.move_tail_to(Vec2::new(x, y)))),
            Err(e) => e,
        }
    }

    // Selection
    pub fn set_selected(&self, set: u32, slot: u32, selected: bool) -> bool {
        vector_of(&self.inner, set, slot).map_or(false, |v| v.set_selected(selected))
    }
    pub fn set_selected_res(&self, set: u32, slot: u32, selected: bool) -> JsValue {
        if set_of(&self.inner, set).is_none() {
            return error::invalid_id("set", set);
        }
        let v = match vector_of(&self.inner, set, slot) {
            Some(v) => v,
            None => return error::invalid_id("slot", slot),
        };
        if selected && v.is_returning() {
            return error::animating(slot);
        }
        error::ok(JsValue::from_bool(v.set_selected(selected)))
    }
    pub fn select_resultant(&self, set: u32, selected: bool) -> bool {
        set_of(&self.inner, set).map_or(false, |s| s.resultant().set_selected(selected))
    }
    pub fn select_resultant_res(&self, set: u32, selected: bool) -> JsValue {
        let s = match set_of(&self.inner, set) {
            Some(s) => s,
            None => return error::invalid_id("set", set),
        };
        let r = s.resultant();
        if selected && !r.visible().get() {
            return error::hidden_resultant(set);
        }
        if selected && !r.is_defined().get() {
            return error::undefined_resultant(set);
        }
        error::ok(JsValue::from_bool(r.set_selected(selected)))
    }
    pub fn set_resultant_visible(&self, set: u32, visible: bool) -> bool {
        match set_of(&self.inner, set) {
            Some(s) => {
                s.resultant().set_visible(visible);
                true
            }
            None => false,
        }
    }
    pub fn set_resultant_visible_res(&self, set: u32, visible: bool) -> JsValue {
        match set_of(&self.inner, set) {
            Some(s) => {
                s.resultant().set_visible(visible);
                error::ok(JsValue::from_bool(true))
            }
            None => error::invalid_id("set", set),
        }
    }
    pub fn clear_selection(&self) {
        self.inner.clear_selection();
    }

    // Clock
    pub fn step(&self, dt: f32) -> bool {
        self.inner.step(dt)
    }
    pub fn step_res(&self, dt: f32) -> JsValue {
        if !dt.is_finite() {
            return error::non_finite("dt");
        }
        if dt <= 0.0 {
            return error::out_of_range("dt", 0.0, f32::INFINITY, dt);
        }
        error::ok(JsValue::from_bool(self.inner.step(dt)))
    }
    pub fn reset(&self) {
        self.inner.reset();
    }

    // JSON
    pub fn to_json(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.to_json_value()).unwrap()
    }
    pub fn from_json(&self, v: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => match self.inner.from_json_value_strict(val) {
                Ok(ok) => ok,
                Err((code, msg)) => {
                    crate::interop::warn(&format!("document rejected: {} {}", code, msg));
                    false
                }
            },
            Err(e) => {
                crate::interop::warn(&format!("document rejected: json_parse {}", e));
                false
            }
        }
    }
    pub fn from_json_res(&self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => match self.inner.from_json_value_strict(val) {
                Ok(ok) => error::ok(JsValue::from_bool(ok)),
                Err((code, msg)) => error::err(code, msg, None),
            },
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }
}

fn set_of(scene: &resultant::Scene, set: u32) -> Option<&resultant::vector_set::VectorSet> {
    scene.set(set as usize)
}

fn vector_of(scene: &resultant::Scene, set: u32, slot: u32) -> Option<&Rc<resultant::vector::Vector>> {
    scene.vector(set as usize, slot as usize)
}

// Shared pre-checks for the two drag endpoints.
fn drag_guard(
    scene: &resultant::Scene,
    set: u32,
    slot: u32,
    x: f32,
    y: f32,
) -> Result<&Rc<resultant::vector::Vector>, JsValue> {
    if !x.is_finite() {
        return Err(error::non_finite("x"));
    }
    if !y.is_finite() {
        return Err(error::non_finite("y"));
    }
    if set_of(scene, set).is_none() {
        return Err(error::invalid_id("set", set));
    }
    let v = match vector_of(scene, set, slot) {
        Some(v) => v,
        None => return Err(error::invalid_id("slot", slot)),
    };
    if v.is_returning() {
        return Err(error::animating(slot));
    }
    if !v.is_on_graph().get() {
        return Err(error::not_on_graph(slot));
    }
    Ok(v)
}

fn parse_snap_mode(s: &str) -> Option<SnapMode> {
    match s {
        "cartesian" => Some(SnapMode::Cartesian),
        "polar" => Some(SnapMode::Polar),
        _ => None,
    }
}

fn parse_component_style(s: &str) -> Option<ComponentStyle> {
    match s {
        "invisible" => Some(ComponentStyle::Invisible),
        "triangle" => Some(ComponentStyle::Triangle),
        "parallelogram" => Some(ComponentStyle::Parallelogram),
        "on_axes" => Some(ComponentStyle::OnAxes),
        _ => None,
    }
}

fn vector_json(v: &resultant::vector::Vector) -> JsValue {
    let tail = v.tail().get();
    let comps = v.components().get();
    let tip = v.tip();
    serde_wasm_bindgen::to_value(&serde_json::json!({
        "slot": v.slot(),
        "symbol": v.symbol(),
        "home": [v.home().x, v.home().y],
        "tail": [tail.x, tail.y],
        "components": [comps.x, comps.y],
        "tip": [tip.x, tip.y],
        "magnitude": v.magnitude(),
        "angle": v.angle(),
        "on_graph": v.is_on_graph().get(),
        "selected": v.is_selected().get(),
        "animate_back": v.animate_back().get(),
        "animating": v.is_animating().get(),
    }))
    .unwrap()
}

fn resultant_json(r: &resultant::vector::ResultantVector) -> JsValue {
    let tail = r.tail().get();
    let comps = r.components().get();
    let tip = r.tip();
    serde_wasm_bindgen::to_value(&serde_json::json!({
        "tail": [tail.x, tail.y],
        "components": [comps.x, comps.y],
        "tip": [tip.x, tip.y],
        "magnitude": r.magnitude(),
        "angle": r.angle(),
        "defined": r.is_defined().get(),
        "selected": r.is_selected().get(),
        "visible": r.visible().get(),
    }))
    .unwrap()
}
