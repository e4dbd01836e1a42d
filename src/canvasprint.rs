//! Canvas rendering probe.
//!
//! Draws a fixed gradient and text sample, exports it as PNG and folds the
//! image bytes into a 32-bit signed hash. Lightweight and collision-prone;
//! not part of the cross-browser identifier.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{FingerprintError, Result};

/// Hash of an empty image, and the fold's starting value.
pub const SEED: i32 = 3001;

pub const PROBE_TEXT: &str = "canvasprint.js 个個칼";
pub const TYPEFACES: [&str; 6] = ["sans-serif", "serif", "fantasy", "cursive", "monospace", "-no-font-"];
const TEXT_COLOR: &str = "rgba(202,56,202,0.53)";
const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Base64 decoding of unpadded input with ignored trailing bits. Padding is
/// removed first by [`strip_padding`].
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Fold raw bytes: `h = ((h << 5) - h) + b * 47`, then `h ^= 0x7fffffff`
/// truncated to 32 bits, starting from [`SEED`].
pub fn fold(bytes: &[u8]) -> i32 {
    bytes.iter().fold(SEED, |hash, &byte| {
        // The shift wraps in 32 bits; the sum is wider and truncated after.
        let mixed = i64::from(hash.wrapping_shl(5)) - i64::from(hash) + i64::from(byte) * 47;
        (mixed as i32) ^ 0x7fff_ffff
    })
}

/// Drop `=` padding the way `atob` does: one or two trailing `=` only when
/// they complete a multiple of four. Any other `=` stays and fails decoding.
fn strip_padding(compact: &str) -> &str {
    if compact.len() % 4 != 0 {
        return compact;
    }
    compact
        .strip_suffix("==")
        .or_else(|| compact.strip_suffix('='))
        .unwrap_or(compact)
}

/// Hash a base64 image payload.
pub fn canvas_hash(base64: &str) -> Result<i32> {
    let compact: String = base64
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r'))
        .collect();
    let bytes = FORGIVING
        .decode(strip_padding(&compact).as_bytes())
        .map_err(|e| FingerprintError::InvalidBase64(e.to_string()))?;
    Ok(fold(&bytes))
}

/// Draw the probe on a fresh canvas and return the PNG as base64.
pub fn render_probe() -> Result<String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FingerprintError::Dom("No document".into()))?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| FingerprintError::Dom(format!("Failed to create canvas: {:?}", e)))?
        .dyn_into()
        .map_err(|_| FingerprintError::Dom("Element is not a canvas".into()))?;

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| FingerprintError::Dom(format!("getContext failed: {:?}", e)))?
        .ok_or_else(|| FingerprintError::Dom("2d context unsupported".into()))?
        .dyn_into()
        .map_err(|_| FingerprintError::Dom("Not a 2d context".into()))?;

    let gradient = context.create_linear_gradient(0.0, 0.0, 70.0, 70.0);
    gradient
        .add_color_stop(0.0, "#dddedf")
        .and_then(|_| gradient.add_color_stop(1.0, "#5062A4"))
        .map_err(|e| FingerprintError::Dom(format!("addColorStop failed: {:?}", e)))?;
    context.set_fill_style_canvas_gradient(&gradient);
    context.fill_rect(0.0, 0.0, 60.0, 60.0);

    for (i, typeface) in TYPEFACES.iter().enumerate() {
        let x = i as f64;
        let y = 10.0 + 6.0 * i as f64;
        context.set_font(&format!("14px {}", typeface));
        context.set_fill_style_str(TEXT_COLOR);
        context
            .fill_text(PROBE_TEXT, x, y)
            .map_err(|e| FingerprintError::Dom(format!("fillText failed: {:?}", e)))?;
    }

    let data_url = canvas
        .to_data_url()
        .map_err(|e| FingerprintError::Dom(format!("toDataURL failed: {:?}", e)))?;
    Ok(data_url.replacen(PNG_DATA_URL_PREFIX, "", 1))
}

/// Render the probe and hash it.
pub fn canvas_print() -> Result<i32> {
    let hash = canvas_hash(&render_probe()?)?;
    log::debug!("Canvas probe hash: {}", hash);
    Ok(hash)
}
