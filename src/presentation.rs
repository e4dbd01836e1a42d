//! Presentation: one line of text for the page.

use crate::digest::FingerprintDigest;
use crate::error::{FingerprintError, Result};

pub const FAILURE_MESSAGE: &str = "Could not calculate cross-browser ID due to an error.";

/// The success or failure line shown to the visitor.
pub fn display_text(id: Option<&FingerprintDigest>) -> String {
    match id {
        Some(id) => format!("Cross-Browser ID: {}", id),
        None => FAILURE_MESSAGE.to_string(),
    }
}

/// Replace the text content of the element with id `element_id`.
pub fn render_into(element_id: &str, text: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FingerprintError::Dom("No document".into()))?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| FingerprintError::Dom(format!("No element with id '{}'", element_id)))?;
    element.set_text_content(Some(text));
    Ok(())
}
