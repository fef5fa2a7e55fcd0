use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Board { pub(crate) inner: tilecolor::Board }

impl Board {
    pub fn rs_new(rows: i32, cols: i32) -> Board {
        Board { inner: tilecolor::Board::new(rows, cols) }
    }
}
