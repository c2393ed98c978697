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

/// Shared in-memory catalog fixtures for unit tests
use crate::catalog::{
    CatalogHandle, CatalogRegistry, CatalogSelector, CompositeCatalogProvider,
};
use crate::error::{Result, SiftError};
use crate::models::catalog::CatalogInfo;
use crate::models::package::PackageRecord;
use crate::provider::{CatalogProvider, CatalogSnapshot, ConnectedCatalog};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A package record with every filterable field populated
pub fn fixture_record(id: &str, name: &str) -> PackageRecord {
    PackageRecord {
        id: id.to_string(),
        name: name.to_string(),
        moniker: Some(id.rsplit('.').next().unwrap_or(id).to_string()),
        tags: vec!["fixture".to_string()],
        commands: Vec::new(),
        package_family_name: None,
        product_code: None,
        versions: vec!["1.0.0".to_string()],
        default_install_version: Some("1.0.0".to_string()),
    }
}

/// A record with no installable version (listed, not installable)
pub fn uninstallable_record(id: &str, name: &str) -> PackageRecord {
    PackageRecord {
        default_install_version: None,
        ..fixture_record(id, name)
    }
}

/// Catalog provider over an in-memory record list, counting connect calls.
pub struct FixtureCatalogProvider {
    info: CatalogInfo,
    records: Vec<PackageRecord>,
    fail_with: Option<String>,
    connect_calls: Arc<AtomicUsize>,
}

impl FixtureCatalogProvider {
    pub fn remote(name: &str, records: Vec<PackageRecord>) -> Self {
        Self {
            info: CatalogInfo::remote(name.to_lowercase(), name),
            records,
            fail_with: None,
            connect_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn installed(records: Vec<PackageRecord>) -> Self {
        Self {
            info: CatalogInfo::installed(),
            records,
            fail_with: None,
            connect_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A provider whose connect always fails with `reason`
    pub fn failing(name: &str, reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::remote(name, Vec::new())
        }
    }

    /// Shared counter of external connect attempts
    pub fn connect_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.connect_calls)
    }
}

impl CatalogProvider for FixtureCatalogProvider {
    fn info(&self) -> &CatalogInfo {
        &self.info
    }

    fn connect(&self) -> Result<Box<dyn ConnectedCatalog>> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.fail_with {
            return Err(SiftError::CatalogFetch(reason.clone()));
        }
        Ok(Box::new(CatalogSnapshot::new(
            self.info.clone(),
            self.records.clone(),
            None,
        )))
    }
}

/// Registry over in-memory catalogs, mirroring `SourceRegistry`'s
/// composite rule for remote selectors.
pub struct FixtureRegistry {
    pub installed: Vec<PackageRecord>,
    /// (name, records) per remote catalog, in enumeration order
    pub remotes: Vec<(String, Vec<PackageRecord>)>,
}

impl FixtureRegistry {
    pub fn new() -> Self {
        Self {
            installed: Vec::new(),
            remotes: Vec::new(),
        }
    }

    pub fn with_installed(mut self, records: Vec<PackageRecord>) -> Self {
        self.installed = records;
        self
    }

    pub fn with_remote(mut self, name: &str, records: Vec<PackageRecord>) -> Self {
        self.remotes.push((name.to_string(), records));
        self
    }

    fn composite_handle(&self, name: &str, records: &[PackageRecord]) -> CatalogHandle {
        let remote = Box::new(FixtureCatalogProvider::remote(name, records.to_vec()));
        let local = Box::new(FixtureCatalogProvider::installed(self.installed.clone()));
        CatalogHandle::new(Box::new(CompositeCatalogProvider::new(remote, local)))
    }
}

impl Default for FixtureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRegistry for FixtureRegistry {
    fn list_remote_catalogs(&self) -> Result<Vec<CatalogInfo>> {
        Ok(self
            .remotes
            .iter()
            .map(|(name, _)| CatalogInfo::remote(name.to_lowercase(), name.clone()))
            .collect())
    }

    fn resolve(&self, selector: &CatalogSelector) -> Result<CatalogHandle> {
        match selector {
            CatalogSelector::LocalInstalled => Ok(CatalogHandle::new(Box::new(
                FixtureCatalogProvider::installed(self.installed.clone()),
            ))),
            CatalogSelector::RemoteByIndex(index) => {
                let (name, records) =
                    self.remotes
                        .get(*index)
                        .ok_or(SiftError::CatalogIndexOutOfRange {
                            index: *index,
                            available: self.remotes.len(),
                        })?;
                Ok(self.composite_handle(name, records))
            }
            CatalogSelector::RemoteByName(name) => {
                let matching: Vec<&(String, Vec<PackageRecord>)> = self
                    .remotes
                    .iter()
                    .filter(|(n, _)| n == name)
                    .collect();
                match matching.as_slice() {
                    [] => Err(SiftError::CatalogNotFound(name.clone())),
                    [(n, records)] => Ok(self.composite_handle(n, records)),
                    many => Err(SiftError::AmbiguousCatalogName {
                        name: name.clone(),
                        matches: many.len(),
                    }),
                }
            }
        }
    }
}
