//! Error types for the cross-browser fingerprint pipeline
//!
//! The taxonomy mirrors how a fingerprint request can go wrong:
//! - malformed collector output aborts extraction
//! - collector failures are recovered at the collector boundary
//! - host (DOM / base64) failures belong to the auxiliary probes
//!
//! An absent field is never an error: it renders as `"undefined"`.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, FingerprintError>;

/// Error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Record errors (1xx)
    MalformedRecord = 100,
    InvalidInput = 101,

    // Collector errors (2xx)
    CollectorFailed = 200,

    // Probe / host errors (3xx)
    InvalidBase64 = 300,
    DomError = 301,
}

/// Main error type for fingerprint computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FingerprintError {
    // ===== Record Errors =====
    #[error("Malformed record at '{path}': expected object, found {found}")]
    MalformedRecord { path: String, found: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ===== Collector Errors =====
    #[error("Collector '{source_name}' failed: {reason}")]
    Collector { source_name: String, reason: String },

    // ===== Probe / Host Errors =====
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl FingerprintError {
    /// Get the error code for programmatic handling
    pub fn code(&self) -> ErrorCode {
        match self {
            FingerprintError::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            FingerprintError::InvalidInput(_) => ErrorCode::InvalidInput,
            FingerprintError::Collector { .. } => ErrorCode::CollectorFailed,
            FingerprintError::InvalidBase64(_) => ErrorCode::InvalidBase64,
            FingerprintError::Dom(_) => ErrorCode::DomError,
        }
    }
}

impl From<FingerprintError> for JsValue {
    fn from(err: FingerprintError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FingerprintError::InvalidBase64("x".into()).code(),
            ErrorCode::InvalidBase64
        );
        assert_eq!(
            FingerprintError::Collector {
                source_name: "ghostIPData".into(),
                reason: "timeout".into(),
            }
            .code(),
            ErrorCode::CollectorFailed
        );
        assert_eq!(ErrorCode::MalformedRecord as u32, 100);
    }

    #[test]
    fn test_pipeline_errors_carry_record_codes() {
        let malformed = FingerprintError::MalformedRecord {
            path: "clientjs".into(),
            found: "string",
        };
        assert_eq!(malformed.code() as u32, 100);
        assert_eq!(FingerprintError::InvalidInput("cyclic".into()).code() as u32, 101);
        assert_eq!(FingerprintError::Dom("no element".into()).code() as u32, 301);
    }

    #[test]
    fn test_malformed_message_names_path() {
        let err = FingerprintError::MalformedRecord {
            path: "ghostDeviceInfo.audio".into(),
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "Malformed record at 'ghostDeviceInfo.audio': expected object, found number"
        );
    }
}
