//! WebAssembly bindings for anofox-mipool.
//!
//! This crate provides JavaScript/TypeScript bindings for pooling analyses of
//! multiply-imputed data using wasm-bindgen.

use wasm_bindgen::prelude::*;

pub mod pooler;

/// Initialize the WASM module.
///
/// This is called automatically when the module is loaded.
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
