use crate::error::{Result, SiftError};
use crate::models::catalog::CatalogInfo;
use crate::provider::{CatalogProvider, ConnectedCatalog};
use crate::search::{SearchFilterSet, SearchMatches};
use chrono::{DateTime, Utc};
use log::debug;

/// Observable connection state of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Unconnected,
    Connected,
    Failed,
}

enum HandleState {
    Unconnected,
    Connected(Box<dyn ConnectedCatalog>),
    Failed { reason: String },
}

/// An exclusively owned reference to one searchable catalog.
///
/// Created Unconnected by the registry; `connect` transitions it exactly
/// once to Connected or Failed. There is no reconnect: a caller that wants
/// a fresh attempt resolves a new handle.
pub struct CatalogHandle {
    info: CatalogInfo,
    provider: Box<dyn CatalogProvider>,
    state: HandleState,
}

impl CatalogHandle {
    pub fn new(provider: Box<dyn CatalogProvider>) -> Self {
        Self {
            info: provider.info().clone(),
            provider,
            state: HandleState::Unconnected,
        }
    }

    pub fn info(&self) -> &CatalogInfo {
        &self.info
    }

    pub fn state(&self) -> ConnectionState {
        match self.state {
            HandleState::Unconnected => ConnectionState::Unconnected,
            HandleState::Connected(_) => ConnectionState::Connected,
            HandleState::Failed { .. } => ConnectionState::Failed,
        }
    }

    fn connect_error(&self, reason: &str) -> SiftError {
        SiftError::ConnectFailed {
            catalog: self.info.name.clone(),
            reason: reason.to_string(),
        }
    }

    /// Connect to the underlying catalog.
    ///
    /// Idempotent: on an already-Connected handle this returns success
    /// without re-issuing the external connect; on a Failed handle it
    /// re-fails immediately with the stored reason, without retrying.
    pub fn connect(&mut self) -> Result<()> {
        match &self.state {
            HandleState::Connected(_) => Ok(()),
            HandleState::Failed { reason } => Err(self.connect_error(reason)),
            HandleState::Unconnected => match self.provider.connect() {
                Ok(connected) => {
                    debug!("Connected to catalog '{}'", self.info.name);
                    self.state = HandleState::Connected(connected);
                    Ok(())
                }
                Err(e) => {
                    let reason = e.to_string();
                    debug!("Connect to catalog '{}' failed: {reason}", self.info.name);
                    self.state = HandleState::Failed {
                        reason: reason.clone(),
                    };
                    Err(self.connect_error(&reason))
                }
            },
        }
    }

    /// Run a filtered search. Only valid on a Connected handle.
    ///
    /// Every call issues a fresh query against the connected catalog; the
    /// returned sequence is consumed in a single pass.
    pub fn search(&self, filters: &SearchFilterSet) -> Result<SearchMatches> {
        match &self.state {
            HandleState::Connected(connected) => {
                let matches = connected
                    .find_packages(filters)
                    .map_err(|e| SiftError::SearchFailed(e.to_string()))?;
                Ok(SearchMatches::new(matches))
            }
            _ => Err(SiftError::NotConnected),
        }
    }

    /// When the connected catalog's data was generated, if known.
    /// `None` on an unconnected or failed handle.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            HandleState::Connected(connected) => connected.last_updated(),
            _ => None,
        }
    }
}
