use crate::catalog::composite::CompositeCatalogProvider;
use crate::catalog::handle::CatalogHandle;
use crate::catalog::selector::CatalogSelector;
use crate::config::{SiftConfig, SourceConfig};
use crate::error::{Result, SiftError};
use crate::models::catalog::CatalogInfo;
use crate::provider::http::RemoteCatalogProvider;
use crate::provider::local::InstalledCatalogProvider;
use std::time::Duration;

/// Enumerates remote catalogs and resolves selectors into handles.
pub trait CatalogRegistry {
    /// Ordered enumeration of the remote catalogs currently available.
    /// Queried live on every call; nothing is cached between calls.
    fn list_remote_catalogs(&self) -> Result<Vec<CatalogInfo>>;

    /// Turn a selector into an unconnected handle. Remote selectors yield
    /// a composite of the selected source with local installed state.
    fn resolve(&self, selector: &CatalogSelector) -> Result<CatalogHandle>;
}

/// Registry backed by the configured source list.
pub struct SourceRegistry<'a> {
    config: &'a SiftConfig,
}

impl<'a> SourceRegistry<'a> {
    pub fn new(config: &'a SiftConfig) -> Self {
        Self { config }
    }

    fn installed_provider(&self) -> InstalledCatalogProvider {
        InstalledCatalogProvider::new(self.config.installed_index_path())
    }

    fn remote_provider(&self, source: &SourceConfig) -> RemoteCatalogProvider {
        RemoteCatalogProvider::new(source.id(), source.name.clone(), &source.url)
            .with_timeout(Duration::from_secs(self.config.http.timeout_secs))
    }

    fn composite_handle(&self, source: &SourceConfig) -> CatalogHandle {
        let remote = Box::new(self.remote_provider(source));
        let local = Box::new(self.installed_provider());
        CatalogHandle::new(Box::new(CompositeCatalogProvider::new(remote, local)))
    }
}

impl CatalogRegistry for SourceRegistry<'_> {
    fn list_remote_catalogs(&self) -> Result<Vec<CatalogInfo>> {
        Ok(self
            .config
            .sources
            .iter()
            .map(|s| CatalogInfo::remote(s.id(), s.name.clone()))
            .collect())
    }

    fn resolve(&self, selector: &CatalogSelector) -> Result<CatalogHandle> {
        match selector {
            CatalogSelector::LocalInstalled => {
                Ok(CatalogHandle::new(Box::new(self.installed_provider())))
            }
            CatalogSelector::RemoteByIndex(index) => {
                let source = self.config.sources.get(*index).ok_or_else(|| {
                    SiftError::CatalogIndexOutOfRange {
                        index: *index,
                        available: self.config.sources.len(),
                    }
                })?;
                Ok(self.composite_handle(source))
            }
            CatalogSelector::RemoteByName(name) => {
                let matching: Vec<&SourceConfig> = self
                    .config
                    .sources
                    .iter()
                    .filter(|s| s.name == *name)
                    .collect();
                match matching.as_slice() {
                    [] => Err(SiftError::CatalogNotFound(name.clone())),
                    [source] => Ok(self.composite_handle(source)),
                    many => Err(SiftError::AmbiguousCatalogName {
                        name: name.clone(),
                        matches: many.len(),
                    }),
                }
            }
        }
    }
}
