use crate::interop::{new_obj, set_kv};
use tilecolor::error::{AssignError, ConfigError};
use wasm_bindgen::prelude::*;

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
pub fn unknown_name(code: &'static str, kind: &str, name: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "name", &JsValue::from_str(name));
    err(code, format!("unknown {} '{}'", kind, name), Some(d.into()))
}

pub fn from_assign(e: &AssignError) -> JsValue {
    match e {
        AssignError::NoValidColoring { steps, budget_exhausted } => {
            let d = new_obj();
            set_kv(&d, "steps", &JsValue::from_f64(*steps as f64));
            set_kv(&d, "budget_exhausted", &JsValue::from_bool(*budget_exhausted));
            err("no_valid_coloring", e.to_string(), Some(d.into()))
        }
        AssignError::InvalidPin { vertex, vertex_count } => {
            let d = new_obj();
            set_kv(&d, "vertex", &JsValue::from_f64(*vertex as f64));
            set_kv(&d, "vertex_count", &JsValue::from_f64(*vertex_count as f64));
            err("invalid_pin", e.to_string(), Some(d.into()))
        }
        AssignError::InvalidColor { color, palette_len } => {
            let d = new_obj();
            set_kv(&d, "color", &JsValue::from_f64(*color as f64));
            set_kv(&d, "palette_len", &JsValue::from_f64(*palette_len as f64));
            err("invalid_pin", e.to_string(), Some(d.into()))
        }
        AssignError::UnknownVertex(name) => unknown_name("unknown_vertex", "vertex", name),
        AssignError::UnknownColor(name) => unknown_name("unknown_color", "color", name),
    }
}

pub fn from_config(e: &ConfigError) -> JsValue {
    err("config", e.to_string(), None)
}
