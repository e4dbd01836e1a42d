//! WASM binding tests
//!
//! Run with: wasm-pack test --headless --chrome
//! (or --firefox, --safari)

#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = include_str!("fixtures/raw_record.json");
const FIXTURE_DIGEST: &str = "36ef91891d6757cfa4bec0d81808d984e8f09cffb38e253f36f720a4e2a1ffb7";
const EMPTY_DIGEST: &str = "84d0e12c6fe6fe7fc5f75d2fad9c3970142485010bbac317a055a19f08c276e9";

fn fixture() -> JsValue {
    js_sys::JSON::parse(FIXTURE).unwrap()
}

// ===== Identifier =====

#[wasm_bindgen_test]
fn id_from_js_object() {
    let id = cbf_wasm::calculate_cross_browser_id(fixture(), JsValue::UNDEFINED);
    assert_eq!(id.as_deref(), Some(FIXTURE_DIGEST));
}

#[wasm_bindgen_test]
fn id_ignores_undefined_members() {
    let data = fixture();
    // JSON.stringify drops undefined, so this is the same as a missing source
    Reflect::set(&data, &"extra".into(), &JsValue::UNDEFINED).unwrap();
    let id = cbf_wasm::calculate_cross_browser_id(data, JsValue::UNDEFINED);
    assert_eq!(id.as_deref(), Some(FIXTURE_DIGEST));
}

#[wasm_bindgen_test]
fn id_for_missing_data() {
    let id = cbf_wasm::calculate_cross_browser_id(JsValue::UNDEFINED, JsValue::UNDEFINED);
    assert_eq!(id.as_deref(), Some(EMPTY_DIGEST));

    let id = cbf_wasm::calculate_cross_browser_id(Object::new().into(), JsValue::UNDEFINED);
    assert_eq!(id.as_deref(), Some(EMPTY_DIGEST));
}

#[wasm_bindgen_test]
fn id_failure_is_undefined() {
    let data = js_sys::JSON::parse(r#"{"ghostDeviceInfo":{"audio":5}}"#).unwrap();
    assert_eq!(cbf_wasm::calculate_cross_browser_id(data, JsValue::UNDEFINED), None);
}

// ===== Features =====

#[wasm_bindgen_test]
fn features_object_has_every_key() {
    let features = cbf_wasm::extract_features(fixture()).unwrap();
    let keys = Object::keys(features.unchecked_ref());
    assert_eq!(keys.length() as usize, cbf_wasm::CATALOG.len());

    let country = Reflect::get(&features, &"ghostIPData.country".into()).unwrap();
    assert_eq!(country.as_string().as_deref(), Some("Germany"));
}

#[wasm_bindgen_test]
fn features_error_carries_message() {
    let data = js_sys::JSON::parse(r#"{"clientjs":7}"#).unwrap();
    let err = cbf_wasm::extract_features(data).unwrap_err();
    let message = err.as_string().unwrap();
    assert!(message.contains("clientjs"), "{}", message);
}

// ===== Canvas =====

#[wasm_bindgen_test]
fn canvas_hash_known_values() {
    assert_eq!(cbf_wasm::canvas_hash("").unwrap(), 3001);
    assert_eq!(cbf_wasm::canvas_hash("QQ==").unwrap(), 2147387561);
    assert!(cbf_wasm::canvas_hash("Q").is_err());
}

#[wasm_bindgen_test]
fn canvas_print_is_stable() {
    let a = cbf_wasm::canvas_print().unwrap();
    let b = cbf_wasm::canvas_print().unwrap();
    assert_eq!(a, b);
    assert_ne!(a, 3001);
}

// ===== Presentation =====

#[wasm_bindgen_test]
fn display_writes_into_element() {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id("cbf-test-output");
    document.body().unwrap().append_child(&element).unwrap();

    let options = Object::new();
    Reflect::set(&options, &"display_element_id".into(), &"cbf-test-output".into()).unwrap();
    cbf_wasm::calculate_and_display(fixture(), options.into());

    assert_eq!(
        element.text_content().as_deref(),
        Some(format!("Cross-Browser ID: {}", FIXTURE_DIGEST).as_str())
    );
}
