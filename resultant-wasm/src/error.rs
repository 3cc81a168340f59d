use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn set_kv(obj: &Object, k: &str, v: &JsValue) { let _ = Reflect::set(obj, &JsValue::from_str(k), v); }

fn new_obj() -> Object { Object::new() }

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f32, max: f32, got: f32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min as f64));
    set_kv(&d, "max", &JsValue::from_f64(max as f64));
    set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("invalid_id", format!("invalid {} id", kind), Some(d.into()))
}

#[inline]
pub fn invalid_mode(got: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "got", &JsValue::from_str(got));
    err("invalid_mode", "snap mode must be 'cartesian' or 'polar'", Some(d.into()))
}

#[inline]
pub fn invalid_style(got: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "got", &JsValue::from_str(got));
    err(
        "invalid_style",
        "component style must be 'invisible', 'triangle', 'parallelogram' or 'on_axes'",
        Some(d.into()),
    )
}

#[inline]
pub fn not_on_graph(slot: u32) -> JsValue { slot_err("not_on_graph", "vector is not on the graph", slot) }

#[inline]
pub fn already_on_graph(slot: u32) -> JsValue { slot_err("already_on_graph", "vector is already on the graph", slot) }

#[inline]
pub fn animating(slot: u32) -> JsValue { slot_err("animating", "vector is animating back to the toolbox", slot) }

fn slot_err(code: &'static str, msg: &str, slot: u32) -> JsValue {
    let d = new_obj(); set_kv(&d, "slot", &JsValue::from_f64(slot as f64));
    err(code, msg.to_string(), Some(d.into()))
}

#[inline]
pub fn hidden_resultant(set: u32) -> JsValue { sum_err("hidden_resultant", "resultant is hidden", set) }

#[inline]
pub fn undefined_resultant(set: u32) -> JsValue {
    sum_err("undefined_resultant", "resultant is undefined while its set is empty", set)
}

fn sum_err(code: &'static str, msg: &str, set: u32) -> JsValue {
    let d = new_obj(); set_kv(&d, "set", &JsValue::from_f64(set as f64));
    err(code, msg.to_string(), Some(d.into()))
}
