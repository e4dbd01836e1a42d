//! Fingerprint configuration.
//!
//! Every field has a default, so JS callers may pass `undefined`, `{}`
//! or any subset of fields.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Endpoint queried by the geolocation collector.
pub const DEFAULT_GEOLOCATION_ENDPOINT: &str = "https://ipapi.co/json/";

/// Element the presentation layer writes the identifier into.
pub const DEFAULT_DISPLAY_ELEMENT_ID: &str = "cross-browser-id";

/// Runtime options for collectors, pipeline and presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintConfig {
    pub geolocation_endpoint: String,
    pub geolocation_timeout_ms: u32,
    pub display_element_id: String,
    /// Log the full feature map at debug level after extraction.
    pub log_features: bool,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            geolocation_endpoint: DEFAULT_GEOLOCATION_ENDPOINT.to_string(),
            geolocation_timeout_ms: 8_000,
            display_element_id: DEFAULT_DISPLAY_ELEMENT_ID.to_string(),
            log_features: true,
        }
    }
}

impl FingerprintConfig {
    /// Read options passed from JS, falling back to defaults when the
    /// value is missing or does not deserialize.
    pub fn from_js(options: JsValue) -> Self {
        if options.is_undefined() || options.is_null() {
            return Self::default();
        }
        serde_wasm_bindgen::from_value(options).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid fingerprint options: {}", e);
            Self::default()
        })
    }
}
