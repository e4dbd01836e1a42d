//! SHA-256 fingerprint digest.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// Length of a rendered digest in hex characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// Lowercase hex SHA-256 of the canonical feature bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FingerprintDigest(String);

impl FingerprintDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FingerprintDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash canonical bytes. Pure: no key, no salt, no clock.
pub fn hash(bytes: &CanonicalBytes) -> FingerprintDigest {
    FingerprintDigest(hex::encode(Sha256::digest(bytes.as_bytes())))
}
