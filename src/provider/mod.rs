// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod index;
pub mod http;
pub mod local;

pub use index::CatalogIndexFile;

use crate::error::Result;
use crate::models::catalog::{CatalogInfo, CatalogOrigin};
use crate::models::package::{PackageMatch, PackageRecord};
use crate::search::SearchFilterSet;
use chrono::{DateTime, Utc};

/// Trait for package catalog backends (synchronous)
pub trait CatalogProvider: Send + Sync {
    /// Identity of the catalog this provider connects to
    fn info(&self) -> &CatalogInfo;

    /// Issue the external connect call. Blocking, potentially long-running;
    /// materializes the catalog contents on success.
    fn connect(&self) -> Result<Box<dyn ConnectedCatalog>>;
}

/// A successfully connected catalog, ready to answer queries.
pub trait ConnectedCatalog: Send + Sync {
    fn info(&self) -> &CatalogInfo;

    /// Evaluate a filter set over the catalog contents. Each call issues a
    /// fresh query; results are eagerly materialized.
    fn find_packages(&self, filters: &SearchFilterSet) -> Result<Vec<PackageMatch>>;

    /// The version an install of `package_id` would resolve to from this
    /// catalog, if it can serve one. Composite catalogs use this to
    /// annotate local matches with online availability.
    fn installable_version(&self, package_id: &str) -> Option<String>;

    /// When the backing index was generated, if it records that
    fn last_updated(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// Materialized contents of a single (non-composite) catalog.
pub struct CatalogSnapshot {
    info: CatalogInfo,
    records: Vec<PackageRecord>,
    last_updated: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    pub fn new(
        info: CatalogInfo,
        records: Vec<PackageRecord>,
        last_updated: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            info,
            records,
            last_updated,
        }
    }

    pub fn records(&self) -> &[PackageRecord] {
        &self.records
    }

    /// Look up a record by package id. Package ids compare
    /// case-insensitively across catalogs.
    pub fn find_by_id(&self, id: &str) -> Option<&PackageRecord> {
        self.records.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }
}

impl ConnectedCatalog for CatalogSnapshot {
    fn info(&self) -> &CatalogInfo {
        &self.info
    }

    fn find_packages(&self, filters: &SearchFilterSet) -> Result<Vec<PackageMatch>> {
        let matches = self
            .records
            .iter()
            .filter(|r| filters.matches(r))
            .map(|r| {
                if self.info.origin == CatalogOrigin::Remote && r.is_installable() {
                    PackageMatch::online(r, self.info.name.clone())
                } else {
                    PackageMatch::local(r)
                }
            })
            .collect();
        Ok(matches)
    }

    fn installable_version(&self, package_id: &str) -> Option<String> {
        self.find_by_id(package_id)
            .and_then(|r| r.default_install_version.clone())
    }

    fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
}
