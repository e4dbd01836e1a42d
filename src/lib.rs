//! # Cross-Browser Fingerprint (WASM)
//!
//! Combines browser/device telemetry into one deterministic identifier.
//!
//! ## Architecture
//!
//! ```text
//! collectors (JS probes, geolocation)
//!   ↓  RawDeviceRecord
//! features::extract      189-entry catalog → FeatureMap
//!   ↓
//! canonical::serialize   sorted, JSON-escaped bytes
//!   ↓
//! digest::hash           SHA-256 → 64 hex chars
//! ```
//!
//! ## Usage
//!
//! ```javascript
//! import init, { calculate_cross_browser_id, get_ip_data } from './pkg/cbf_wasm.js';
//! await init();
//! const ghostIPData = await get_ip_data();
//! const id = calculate_cross_browser_id({ ghostDeviceInfo, clientjs, thumbmarkjs, opfsFingerprint, ghostIPData });
//! ```

use js_sys::{Object, Reflect};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

pub mod canonical;
pub mod canvasprint;
pub mod config;
pub mod digest;
mod error;
pub mod features;
pub mod geolocation;
pub mod json;
pub mod pipeline;
pub mod presentation;
pub mod record;

pub use canonical::CanonicalBytes;
pub use config::FingerprintConfig;
pub use digest::FingerprintDigest;
pub use error::{ErrorCode, FingerprintError, Result};
pub use features::{Feature, FeatureMap, Render, CATALOG};
pub use pipeline::{compute_fingerprint, compute_fingerprint_with, FingerprintPipeline, Stage};
pub use record::{RawDeviceRecord, UNAVAILABLE};

/// Initialize the module
///
/// Installs the console logger.
#[wasm_bindgen(start)]
pub fn init() {
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger not installed: {}", e)));
    }

    log::info!("Cross-browser fingerprint module initialized");
}

/// Read a raw record out of a JS value.
///
/// Goes through `JSON.stringify`, so `undefined` members are dropped and
/// resolve as absent. `undefined`/`null` input is an empty record.
fn record_from_js(data: &JsValue) -> Result<RawDeviceRecord> {
    if data.is_undefined() || data.is_null() {
        return Ok(RawDeviceRecord::from_value(Value::Null));
    }

    let text = js_sys::JSON::stringify(data)
        .map_err(|e| FingerprintError::InvalidInput(format!("JSON.stringify failed: {:?}", e)))?
        .as_string()
        .ok_or_else(|| FingerprintError::InvalidInput("record is not serializable".into()))?;

    RawDeviceRecord::from_json(&text)
}

fn fingerprint_from_js(data: &JsValue, config: &FingerprintConfig) -> Option<FingerprintDigest> {
    match record_from_js(data) {
        Ok(record) => compute_fingerprint_with(&record, config),
        Err(e) => {
            log::error!("Could not read fingerprint data (E{}): {}", e.code() as u32, e);
            None
        }
    }
}

/// Compute the cross-browser ID for the collected `data`.
///
/// Returns `undefined` when no fingerprint can be computed.
#[wasm_bindgen]
pub fn calculate_cross_browser_id(data: JsValue, options: JsValue) -> Option<String> {
    let config = FingerprintConfig::from_js(options);
    fingerprint_from_js(&data, &config).map(FingerprintDigest::into_string)
}

/// Extract the feature map for `data`, keys in canonical order.
#[wasm_bindgen]
pub fn extract_features(data: JsValue) -> std::result::Result<JsValue, JsValue> {
    let record = record_from_js(&data)?;
    let features = features::extract(&record)?;

    let result = Object::new();
    for (key, value) in features.sorted_entries() {
        Reflect::set(&result, &JsValue::from_str(key), &JsValue::from_str(value))?;
    }
    Ok(result.into())
}

/// Compute the ID and write the success or failure line into the page.
#[wasm_bindgen]
pub fn calculate_and_display(data: JsValue, options: JsValue) {
    let config = FingerprintConfig::from_js(options);
    let id = fingerprint_from_js(&data, &config);
    let text = presentation::display_text(id.as_ref());

    if let Err(e) = presentation::render_into(&config.display_element_id, &text) {
        log::error!("Error displaying cross-browser ID: {}", e);
    }
}

/// Hash a base64 canvas image (canvasprint).
#[wasm_bindgen]
pub fn canvas_hash(base64: &str) -> std::result::Result<i32, JsValue> {
    Ok(canvasprint::canvas_hash(base64)?)
}

/// Render the canvas probe in this browser and hash it.
#[wasm_bindgen]
pub fn canvas_print() -> std::result::Result<i32, JsValue> {
    Ok(canvasprint::canvas_print()?)
}

/// Collect IP geolocation: `{ip, country, region, city, latitude, longitude}`
/// or `"N/A"` on any failure.
#[wasm_bindgen]
pub async fn get_ip_data(options: JsValue) -> std::result::Result<JsValue, JsValue> {
    let config = FingerprintConfig::from_js(options);
    let value = geolocation::fetch_ip_data(&config).await;
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}
