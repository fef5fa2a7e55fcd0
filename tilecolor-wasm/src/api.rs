use crate::error;
use crate::interop::{arr_u32, arr_u8, new_obj, set_kv, to_js};
use crate::Board;
use tilecolor::algorithms::recolor::Interaction;
use tilecolor::config::EngineConfig;
use tilecolor::error::ConfigError;
use tilecolor::topology::layout::TileKind;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging(verbose: bool) {
    set_panic_hook();
    let level = if verbose { log::Level::Debug } else { log::Level::Warn };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("tilecolor: logger already initialised"));
    }
}

fn config_from_js(v: JsValue) -> Result<EngineConfig, JsValue> {
    if v.is_undefined() || v.is_null() {
        return Ok(EngineConfig::default());
    }
    let json = serde_wasm_bindgen::from_value::<serde_json::Value>(v)
        .map_err(|e| error::err("config", e.to_string(), None))?;
    EngineConfig::from_json_value(json).map_err(|e| error::from_config(&e))
}

fn interaction_to_js(b: &tilecolor::Board, i: Interaction) -> JsValue {
    let o = new_obj();
    let (outcome, vertex, color) = match i {
        Interaction::Recolored { vertex, color } => ("recolored", Some(vertex), Some(color)),
        Interaction::Rejected { vertex, proposed } => ("rejected", Some(vertex), Some(proposed)),
        Interaction::Ignored => ("ignored", None, None),
    };
    set_kv(&o, "outcome", &JsValue::from_str(outcome));
    if let Some(name) = vertex.and_then(|v| b.graph().name(v)) {
        set_kv(&o, "vertex", &JsValue::from_str(name));
    }
    if let Some(entry) = color.and_then(|c| b.palette().entry(c)) {
        set_kv(&o, "color", &JsValue::from_str(&entry.name));
    }
    o.into()
}

fn kind_code(k: TileKind) -> u8 {
    k as u8
}

#[wasm_bindgen]
impl Board {
    #[wasm_bindgen(constructor)]
    pub fn new(rows: i32, cols: i32) -> Board {
        crate::Board::rs_new(rows, cols)
    }

    /// Grid board from a config object; throws a `{ok:false, error}` object on bad config.
    pub fn with_config(rows: i32, cols: i32, config: JsValue) -> Result<Board, JsValue> {
        let cfg = config_from_js(config)?;
        tilecolor::Board::with_config(rows, cols, cfg)
            .map(|inner| Board { inner })
            .map_err(|e: ConfigError| error::from_config(&e))
    }

    pub fn circle(config: JsValue) -> Result<Board, JsValue> {
        let cfg = config_from_js(config)?;
        tilecolor::Board::circle(cfg)
            .map(|inner| Board { inner })
            .map_err(|e| error::from_config(&e))
    }

    pub fn resize(&mut self, rows: i32, cols: i32) {
        self.inner.resize(rows, cols);
    }
    pub fn vertex_count(&self) -> u32 {
        self.inner.graph().vertex_count() as u32
    }
    pub fn tile_count(&self) -> u32 {
        self.inner.graph().tile_count() as u32
    }
    pub fn rows(&self) -> u32 {
        self.inner.dimensions().0
    }
    pub fn cols(&self) -> u32 {
        self.inner.dimensions().1
    }

    // Pointer events
    pub fn region_enter(&mut self, name: &str) -> bool {
        matches!(self.inner.region_enter(name), Ok(i) if i.is_recolored())
    }
    pub fn region_enter_res(&mut self, name: &str) -> JsValue {
        match self.inner.region_enter(name) {
            Ok(i) => error::ok(interaction_to_js(&self.inner, i)),
            Err(e) => error::from_assign(&e),
        }
    }
    pub fn region_leave(&mut self, name: &str) -> bool {
        self.inner.region_leave(name)
    }
    pub fn region_leave_res(&mut self, name: &str) -> JsValue {
        if self.inner.region_leave(name) {
            error::ok(JsValue::TRUE)
        } else {
            error::unknown_name("unknown_vertex", "vertex", name)
        }
    }
    pub fn interact(&mut self, name: &str) -> bool {
        matches!(self.inner.interact(name), Ok(i) if i.is_recolored())
    }
    pub fn interact_res(&mut self, name: &str) -> JsValue {
        match self.inner.interact(name) {
            Ok(i) => error::ok(interaction_to_js(&self.inner, i)),
            Err(e) => error::from_assign(&e),
        }
    }
    pub fn pin(&mut self, name: &str, color: &str) -> bool {
        self.inner.pin(name, color).is_ok()
    }
    pub fn pin_res(&mut self, name: &str, color: &str) -> JsValue {
        match self.inner.pin(name, color) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_assign(&e),
        }
    }

    // Colors
    pub fn get_colors(&self) -> JsValue {
        to_js(&self.inner.hex_colors())
    }
    pub fn get_color(&self, name: &str) -> Option<String> {
        self.inner.hex_of(name)
    }
    pub fn get_tile_colors(&self, tile: &str) -> JsValue {
        match self.inner.tile_colors(tile) {
            Some(t) => to_js(&t),
            None => JsValue::NULL,
        }
    }
    pub fn get_tile_colors_res(&self, tile: &str) -> JsValue {
        if self.inner.graph().tile_by_name(tile).is_none() {
            return error::unknown_name("unknown_tile", "tile", tile);
        }
        match self.inner.tile_colors(tile) {
            Some(t) => error::ok(to_js(&t)),
            None => error::err("uncolored", format!("tile '{}' has no coloring", tile), None),
        }
    }
    pub fn get_palette(&self) -> JsValue {
        to_js(self.inner.palette().entries())
    }

    // Typed arrays getters
    pub fn get_color_data(&self) -> JsValue {
        let arrays = self.inner.color_arrays();
        let obj = new_obj();
        set_kv(&obj, "ids", &arr_u32(&arrays.ids).into());
        set_kv(&obj, "rgba", &arr_u8(&arrays.rgba).into());
        obj.into()
    }
    pub fn get_layout(&self) -> JsValue {
        let layout = self.inner.layout();
        let kinds: Vec<u8> = layout.kinds().iter().map(|k| kind_code(*k)).collect();
        let obj = new_obj();
        set_kv(&obj, "rows", &JsValue::from_f64(layout.rows() as f64));
        set_kv(&obj, "cols", &JsValue::from_f64(layout.cols() as f64));
        set_kv(&obj, "kinds", &arr_u8(&kinds).into());
        obj.into()
    }
    pub fn get_neighbors(&self, name: &str) -> JsValue {
        let g = self.inner.graph();
        match g.lookup(name) {
            Some(v) => {
                let names: Vec<&str> = g.neighbors(v).iter().filter_map(|&n| g.name(n)).collect();
                to_js(&names)
            }
            None => JsValue::NULL,
        }
    }

    pub fn validate(&self) -> JsValue {
        to_js(&self.inner.validate())
    }

    // JSON
    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.to_json_value())
    }
}
