//! WASM bindings for mask-core.
//!
//! Exposes `encode` and `decode` as `#[wasm_bindgen]` functions that can be
//! called from JavaScript/TypeScript. Built with `wasm-bindgen-cli` (not
//! wasm-pack, which was archived in July 2025).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p mask-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/mask_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Encode the JSON representation of a mask into the compact URI form.
///
/// Returns the mask string, or throws a JS error if the input is not a
/// valid mask representation.
#[wasm_bindgen]
pub fn encode(json: &str) -> std::result::Result<String, JsValue> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mask = mask_core::from_json(&value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(mask_core::encode(&mask))
}

/// Decode a compact mask string into its JSON representation.
///
/// Returns the JSON string, or throws a JS error if the input is malformed.
#[wasm_bindgen]
pub fn decode(mask: &str) -> std::result::Result<String, JsValue> {
    let tree = mask_core::decode(mask).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&mask_core::to_json(&tree))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
