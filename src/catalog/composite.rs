//! Composite catalog: one remote source combined with local installed
//! state.
//!
//! Search behavior is "limit to local catalogs": the filter set is
//! evaluated against the local entries, and each match is annotated with
//! whether the remote source can serve an installable version of it. The
//! composite answers "which of my locally-known packages does this source
//! offer", not a pure remote listing.

use crate::error::Result;
use crate::models::catalog::CatalogInfo;
use crate::models::package::PackageMatch;
use crate::provider::{CatalogProvider, ConnectedCatalog};
use crate::search::SearchFilterSet;
use chrono::{DateTime, Utc};

pub struct CompositeCatalogProvider {
    info: CatalogInfo,
    remote: Box<dyn CatalogProvider>,
    local: Box<dyn CatalogProvider>,
}

impl CompositeCatalogProvider {
    pub fn new(remote: Box<dyn CatalogProvider>, local: Box<dyn CatalogProvider>) -> Self {
        Self {
            info: CatalogInfo::composite_of(remote.info()),
            remote,
            local,
        }
    }
}

impl CatalogProvider for CompositeCatalogProvider {
    fn info(&self) -> &CatalogInfo {
        &self.info
    }

    fn connect(&self) -> Result<Box<dyn ConnectedCatalog>> {
        // The selected source fails the whole composite before local state
        // is touched.
        let remote = self.remote.connect()?;
        let local = self.local.connect()?;
        Ok(Box::new(CompositeSnapshot {
            info: self.info.clone(),
            remote,
            local,
        }))
    }
}

struct CompositeSnapshot {
    info: CatalogInfo,
    remote: Box<dyn ConnectedCatalog>,
    local: Box<dyn ConnectedCatalog>,
}

impl ConnectedCatalog for CompositeSnapshot {
    fn info(&self) -> &CatalogInfo {
        &self.info
    }

    fn find_packages(&self, filters: &SearchFilterSet) -> Result<Vec<PackageMatch>> {
        let remote_name = &self.remote.info().name;
        let matches = self
            .local
            .find_packages(filters)?
            .into_iter()
            .map(|m| {
                if self.remote.installable_version(&m.package_id).is_some() {
                    PackageMatch {
                        available_online: true,
                        source_online_catalog_name: Some(remote_name.clone()),
                        ..m
                    }
                } else {
                    m
                }
            })
            .collect();
        Ok(matches)
    }

    fn installable_version(&self, package_id: &str) -> Option<String> {
        self.remote.installable_version(package_id)
    }

    fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.remote.last_updated().or(self.local.last_updated())
    }
}
