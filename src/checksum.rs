//! Fingerprints for projected schemas
//!
//! A fingerprint is the SHA256 of a projection's JSON form. Projections are
//! deterministic, so equal inputs always produce equal fingerprints; code
//! generators use them to skip unchanged endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::resolve::ProjectedSchema;

/// SHA256 fingerprint of a projected schema
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute a fingerprint from raw bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self(format!("{:x}", hash))
    }

    /// Fingerprint a projection.
    ///
    /// The requested version is left out: two versions that project to the
    /// same tree share a fingerprint.
    pub fn of(schema: &ProjectedSchema) -> Result<Self> {
        let canonical = serde_json::to_vec(&(&schema.endpoint, &schema.floor, &schema.root))?;
        Ok(Self::from_bytes(&canonical))
    }

    /// Get the hex string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex digits, for display
    pub fn short(&self) -> &str {
        &self.0[..12.min(self.0.len())]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
