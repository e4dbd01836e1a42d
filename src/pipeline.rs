//! Fingerprint pipeline: extract → serialize → hash.
//!
//! ```text
//! Start → Extracting → Serializing → Hashing → Done
//!              └────────────┴────────────┴──→ Failed
//! ```
//!
//! A failed run never yields a partial digest.

use std::fmt;

use crate::canonical::serialize;
use crate::config::FingerprintConfig;
use crate::digest::{hash, FingerprintDigest};
use crate::error::{FingerprintError, Result};
use crate::features::extract;
use crate::record::RawDeviceRecord;

/// Pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Extracting,
    Serializing,
    Hashing,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Extracting => "extracting",
            Stage::Serializing => "serializing",
            Stage::Hashing => "hashing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Runs one fingerprint request and remembers where it ended.
#[derive(Debug, Clone)]
pub struct FingerprintPipeline {
    stage: Stage,
    failed_at: Option<Stage>,
    log_features: bool,
}

impl FingerprintPipeline {
    pub fn new(config: &FingerprintConfig) -> Self {
        Self {
            stage: Stage::Start,
            failed_at: None,
            log_features: config.log_features,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The stage that was active when the last run failed.
    pub fn failed_at(&self) -> Option<Stage> {
        self.failed_at
    }

    fn enter(&mut self, stage: Stage) {
        log::debug!("[pipeline] {} → {}", self.stage, stage);
        self.stage = stage;
    }

    fn fail(&mut self, err: FingerprintError) -> FingerprintError {
        log::error!("[pipeline] {} failed (E{}): {}", self.stage, err.code() as u32, err);
        self.failed_at = Some(self.stage);
        self.stage = Stage::Failed;
        err
    }

    /// Compute the digest for `record`. Each call starts from [`Stage::Start`].
    pub fn run(&mut self, record: &RawDeviceRecord) -> Result<FingerprintDigest> {
        self.stage = Stage::Start;
        self.failed_at = None;

        self.enter(Stage::Extracting);
        let features = extract(record).map_err(|e| self.fail(e))?;
        if self.log_features {
            log::debug!("[pipeline] extracted features: {:?}", features.sorted_entries());
        }

        self.enter(Stage::Serializing);
        let bytes = serialize(&features);

        self.enter(Stage::Hashing);
        let digest = hash(&bytes);

        self.enter(Stage::Done);
        log::info!("[pipeline] generated hash: {}", digest);
        Ok(digest)
    }
}

impl Default for FingerprintPipeline {
    fn default() -> Self {
        Self::new(&FingerprintConfig::default())
    }
}

/// Cross-browser identifier for `record`, or `None` if it cannot be computed.
pub fn compute_fingerprint(record: &RawDeviceRecord) -> Option<FingerprintDigest> {
    compute_fingerprint_with(record, &FingerprintConfig::default())
}

/// [`compute_fingerprint`] with explicit options.
pub fn compute_fingerprint_with(
    record: &RawDeviceRecord,
    config: &FingerprintConfig,
) -> Option<FingerprintDigest> {
    FingerprintPipeline::new(config).run(record).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_successful_run_reaches_done() {
        let mut pipeline = FingerprintPipeline::default();
        let record = RawDeviceRecord::from_value(json!({ "clientjs": { "isMac": true } }));
        let digest = pipeline.run(&record).unwrap();
        assert_eq!(pipeline.stage(), Stage::Done);
        assert_eq!(pipeline.failed_at(), None);
        assert_eq!(digest.as_str().len(), 64);
    }

    #[test]
    fn test_malformed_record_fails_in_extraction() {
        let mut pipeline = FingerprintPipeline::default();
        let record = RawDeviceRecord::from_value(json!({ "ghostDeviceInfo": { "audio": 5 } }));
        let err = pipeline.run(&record).unwrap_err();
        assert!(matches!(err, FingerprintError::MalformedRecord { .. }));
        assert_eq!(pipeline.stage(), Stage::Failed);
        assert_eq!(pipeline.failed_at(), Some(Stage::Extracting));
    }

    #[test]
    fn test_rerun_resets_state() {
        let mut pipeline = FingerprintPipeline::default();
        let bad = RawDeviceRecord::from_value(json!(5));
        assert!(pipeline.run(&bad).is_err());
        assert!(pipeline.run(&RawDeviceRecord::new()).is_ok());
        assert_eq!(pipeline.stage(), Stage::Done);
        assert_eq!(pipeline.failed_at(), None);
    }

    #[test]
    fn test_compute_fingerprint_is_deterministic() {
        let record = RawDeviceRecord::from_value(json!({
            "thumbmarkjs": { "math": { "pi": 3.141592653589793 } }
        }));
        assert_eq!(compute_fingerprint(&record), compute_fingerprint(&record));
    }

    #[test]
    fn test_compute_fingerprint_failure_is_none() {
        let record = RawDeviceRecord::from_value(json!({ "ghostDeviceInfo": true }));
        assert_eq!(compute_fingerprint(&record), None);
    }
}
