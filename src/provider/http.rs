//! Remote catalog provider fetching a JSON index over HTTP.
//!
//! Backoff and rate-limit handling live here, inside the engine boundary;
//! the search client above this layer never retries.

use crate::error::{Result, SiftError};
use crate::models::catalog::CatalogInfo;
use crate::provider::{CatalogIndexFile, CatalogProvider, CatalogSnapshot, ConnectedCatalog};
use crate::user_agent;
use attohttpc::Session;
use log::debug;
use retry::{OperationResult, delay::Exponential, retry_with_index};
use std::thread;
use std::time::Duration;

const DEFAULT_TIMEOUT: u64 = 30;
const MAX_RETRIES: usize = 3;
const INITIAL_BACKOFF_MS: u64 = 1000;

pub struct RemoteCatalogProvider {
    info: CatalogInfo,
    base_url: String,
    session: Session,
}

impl RemoteCatalogProvider {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_url: &str) -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::catalog_client());
        session.timeout(Duration::from_secs(DEFAULT_TIMEOUT));
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            info: CatalogInfo::remote(id, name),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.session.timeout(timeout);
        self
    }

    fn fetch_index(&self) -> Result<CatalogIndexFile> {
        let url = format!("{}/index.json", self.base_url);
        debug!("Fetching catalog index from {url}");

        let result = retry_with_index(
            Exponential::from_millis(INITIAL_BACKOFF_MS).take(MAX_RETRIES),
            |current_try| {
                let response = match self.session.get(&url).send() {
                    Ok(resp) => resp,
                    Err(e) => {
                        let user_error = SiftError::CatalogFetch(format!(
                            "Network error fetching catalog '{}': {e}",
                            self.info.name
                        ));

                        if current_try < (MAX_RETRIES - 1) as u64 {
                            return OperationResult::Retry(user_error);
                        }
                        return OperationResult::Err(user_error);
                    }
                };

                if response.status() == attohttpc::StatusCode::TOO_MANY_REQUESTS
                    && current_try < (MAX_RETRIES - 1) as u64
                {
                    if let Some(retry_after) = response.headers().get("Retry-After") {
                        if let Ok(retry_str) = retry_after.to_str() {
                            if let Ok(seconds) = retry_str.parse::<u64>() {
                                thread::sleep(Duration::from_secs(seconds));
                            }
                        }
                    }
                    return OperationResult::Retry(SiftError::CatalogFetch(
                        "Too many requests. Waiting before retrying...".to_string(),
                    ));
                }

                if !response.is_success() {
                    let status = response.status();
                    return OperationResult::Err(SiftError::CatalogFetch(format!(
                        "HTTP {} fetching catalog '{}'",
                        status.as_u16(),
                        self.info.name
                    )));
                }

                match response.json::<CatalogIndexFile>() {
                    Ok(index) => OperationResult::Ok(index),
                    Err(e) => OperationResult::Err(SiftError::InvalidCatalogData(format!(
                        "Failed to parse catalog index from {url}: {e}"
                    ))),
                }
            },
        );

        let index = result.map_err(|e| e.error)?;
        index.validate()?;
        Ok(index)
    }
}

impl CatalogProvider for RemoteCatalogProvider {
    fn info(&self) -> &CatalogInfo {
        &self.info
    }

    fn connect(&self) -> Result<Box<dyn ConnectedCatalog>> {
        let index = self.fetch_index()?;
        debug!(
            "Connected to remote catalog '{}', {} packages",
            self.info.name,
            index.packages.len()
        );
        Ok(Box::new(CatalogSnapshot::new(
            self.info.clone(),
            index.packages,
            index.generated,
        )))
    }
}
