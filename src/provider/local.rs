//! Installed-package catalog provider.
//!
//! Reads the installed-package index from a JSON file under the pkgsift
//! home. A missing index is an empty install state, not an error.

use crate::error::{Result, SiftError};
use crate::models::catalog::CatalogInfo;
use crate::provider::{CatalogIndexFile, CatalogProvider, CatalogSnapshot, ConnectedCatalog};
use std::fs::File;
use std::path::PathBuf;

pub struct InstalledCatalogProvider {
    info: CatalogInfo,
    index_path: PathBuf,
}

impl InstalledCatalogProvider {
    pub fn new(index_path: PathBuf) -> Self {
        Self {
            info: CatalogInfo::installed(),
            index_path,
        }
    }

    fn read_index(&self) -> Result<CatalogIndexFile> {
        if !self.index_path.exists() {
            log::debug!(
                "Installed index not found at {}, treating as empty",
                self.index_path.display()
            );
            return Ok(CatalogIndexFile::new(Vec::new()));
        }

        let file = File::open(&self.index_path).map_err(|e| {
            SiftError::CatalogFetch(format!(
                "Failed to open installed index {}: {e}",
                self.index_path.display()
            ))
        })?;

        let index: CatalogIndexFile = serde_json::from_reader(file).map_err(|e| {
            SiftError::InvalidCatalogData(format!(
                "Failed to parse installed index {}: {e}",
                self.index_path.display()
            ))
        })?;
        index.validate()?;

        Ok(index)
    }
}

impl CatalogProvider for InstalledCatalogProvider {
    fn info(&self) -> &CatalogInfo {
        &self.info
    }

    fn connect(&self) -> Result<Box<dyn ConnectedCatalog>> {
        let index = self.read_index()?;
        log::debug!(
            "Connected to installed catalog, {} packages",
            index.packages.len()
        );
        Ok(Box::new(CatalogSnapshot::new(
            self.info.clone(),
            index.packages,
            index.generated,
        )))
    }
}
