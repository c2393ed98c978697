use crate::cancel::CancelToken;
use crate::catalog::{CatalogRegistry, CatalogSelector};
use crate::error::Result;
use crate::search::filter::SearchFilterSet;
use crate::search::models::SearchMatches;

/// High-level search orchestration: resolve → connect → search, strictly
/// in that order, each stage's failure propagated as a typed error.
///
/// Deliberately has no retry and no timeout of its own; both belong to the
/// underlying catalog backends. Cancellation is checked at each stage
/// boundary, never mid-flight.
pub struct CatalogSearchClient<R: CatalogRegistry> {
    registry: R,
    cancel: CancelToken,
}

impl<R: CatalogRegistry> CatalogSearchClient<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn search(
        &self,
        selector: &CatalogSelector,
        filters: &SearchFilterSet,
    ) -> Result<SearchMatches> {
        self.cancel.check()?;
        let mut handle = self.registry.resolve(selector)?;

        self.cancel.check()?;
        handle.connect()?;

        self.cancel.check()?;
        handle.search(filters)
    }
}
