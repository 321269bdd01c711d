//! # Content Digests
//!
//! [`ContentDigest`] identifies the exact disclosure content of a submitted
//! report. Digests are the receipt a filer gets back from submission and
//! the value a verifier recomputes against the persisted payload.
//!
//! ## Invariant
//!
//! A digest can only be computed from [`CanonicalBytes`][crate::CanonicalBytes],
//! so every digest in the system was produced from normalized data.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// The hash algorithm used to compute a content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-256 — the only algorithm in use.
    Sha256,
}

/// A content digest with its algorithm tag.
///
/// The algorithm travels with the bytes so verification code can select
/// the correct hash function if the algorithm set ever grows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Create a SHA-256 content digest from raw bytes.
    pub fn sha256(bytes: [u8; 32]) -> Self {
        Self {
            algorithm: DigestAlgorithm::Sha256,
            bytes,
        }
    }

    /// Return the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Compute the SHA-256 digest of canonical bytes.
pub fn sha256_digest(bytes: &CanonicalBytes) -> ContentDigest {
    let mut hasher = Sha256::new();
    hasher.update(bytes.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    ContentDigest::sha256(out)
}

/// Compute the SHA-256 digest of canonical bytes as a hex string.
pub fn sha256_hex(bytes: &CanonicalBytes) -> String {
    sha256_digest(bytes).to_hex()
}
