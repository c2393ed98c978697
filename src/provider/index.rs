//! On-disk / on-wire catalog index format.
//!
//! Both the local installed-package index and remote catalog indexes use
//! the same JSON shape, so one set of models covers both providers.

use crate::error::{Result, SiftError};
use crate::models::package::PackageRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const INDEX_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogIndexFile {
    pub version: u32,

    /// When the index was generated, if the producer recorded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<DateTime<Utc>>,

    #[serde(default)]
    pub packages: Vec<PackageRecord>,
}

impl CatalogIndexFile {
    pub fn new(packages: Vec<PackageRecord>) -> Self {
        Self {
            version: INDEX_FORMAT_VERSION,
            generated: Some(Utc::now()),
            packages,
        }
    }

    /// Reject indexes written by a newer tool rather than misreading them.
    pub fn validate(&self) -> Result<()> {
        if self.version > INDEX_FORMAT_VERSION {
            return Err(SiftError::InvalidCatalogData(format!(
                "index format version {} is newer than supported version {INDEX_FORMAT_VERSION}",
                self.version
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_newer_format() {
        let index = CatalogIndexFile {
            version: INDEX_FORMAT_VERSION + 1,
            generated: None,
            packages: Vec::new(),
        };
        assert!(index.validate().is_err());
    }

    #[test]
    fn test_deserialize_without_generated() {
        let json = r#"{"version": 1, "packages": []}"#;
        let index: CatalogIndexFile = serde_json::from_str(json).unwrap();
        assert!(index.generated.is_none());
        assert!(index.validate().is_ok());
    }
}
