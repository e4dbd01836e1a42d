//! IP geolocation collector (`ghostIPData`).
//!
//! One optional record source backed by a third-party JSON endpoint. Any
//! failure yields the [`UNAVAILABLE`] sentinel for the whole subtree,
//! never a partial fill.

use futures::future::{select, Either};
use futures::pin_mut;
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FingerprintConfig;
use crate::error::{FingerprintError, Result};
use crate::record::UNAVAILABLE;

/// Record source name for this collector.
pub const SOURCE: &str = "ghostIPData";

/// (record field, response field) pairs, in record order.
const FIELDS: &[(&str, &str)] = &[
    ("ip", "ip"),
    ("country", "country_name"),
    ("region", "region"),
    ("city", "city"),
    ("latitude", "latitude"),
    ("longitude", "longitude"),
];

fn collector_error(reason: impl Into<String>) -> FingerprintError {
    FingerprintError::Collector {
        source_name: SOURCE.to_string(),
        reason: reason.into(),
    }
}

/// Project an API response body onto the record shape.
///
/// Members missing from the response are left out rather than nulled.
pub fn project_response(body: &Value) -> Result<Value> {
    let response = body
        .as_object()
        .ok_or_else(|| collector_error("response is not a JSON object"))?;

    let mut record = Map::new();
    for (field, response_field) in FIELDS {
        if let Some(value) = response.get(*response_field) {
            record.insert((*field).to_string(), value.clone());
        }
    }
    Ok(Value::Object(record))
}

/// Collapse a collector outcome into a record value.
pub fn or_unavailable(outcome: Result<Value>) -> Value {
    outcome.unwrap_or_else(|e| {
        log::error!("Error fetching IP data: {}", e);
        Value::String(UNAVAILABLE.to_string())
    })
}

async fn fetch_json(url: &str) -> Result<Value> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| collector_error(format!("Failed to create request: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| collector_error("No window object"))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| collector_error(format!("Fetch failed: {:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| collector_error("Failed to cast to Response"))?;

    if !resp.ok() {
        return Err(collector_error(format!(
            "HTTP error! Status: {}",
            resp.status()
        )));
    }

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| collector_error(format!("Failed to get text: {:?}", e)))?,
    )
    .await
    .map_err(|e| collector_error(format!("Failed to read text: {:?}", e)))?;

    let text = text
        .as_string()
        .ok_or_else(|| collector_error("Response is not a string"))?;

    serde_json::from_str(&text).map_err(|e| collector_error(format!("Invalid JSON: {}", e)))
}

/// Query the endpoint and project the response, racing the configured timeout.
pub async fn collect(config: &FingerprintConfig) -> Result<Value> {
    log::info!("🌐 Fetching IP data from {}", config.geolocation_endpoint);

    let fetch = fetch_json(&config.geolocation_endpoint);
    let timeout = gloo_timers::future::TimeoutFuture::new(config.geolocation_timeout_ms);
    pin_mut!(fetch);
    pin_mut!(timeout);

    let body = match select(fetch, timeout).await {
        Either::Left((result, _)) => result?,
        Either::Right(_) => {
            return Err(collector_error(format!(
                "timed out after {}ms",
                config.geolocation_timeout_ms
            )))
        }
    };

    project_response(&body)
}

/// The `ghostIPData` record value: projected data or the sentinel.
pub async fn fetch_ip_data(config: &FingerprintConfig) -> Value {
    or_unavailable(collect(config).await)
}
