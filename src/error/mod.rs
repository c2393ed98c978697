mod context;
mod exit_codes;
mod format;
#[cfg(test)]
mod tests;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_chain;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("Catalog index {index} is out of range ({available} remote catalogs configured)")]
    CatalogIndexOutOfRange { index: usize, available: usize },

    #[error("No remote catalog named '{0}'")]
    CatalogNotFound(String),

    #[error("Catalog name '{name}' is ambiguous ({matches} catalogs share it)")]
    AmbiguousCatalogName { name: String, matches: usize },

    #[error("Failed to connect to catalog '{catalog}': {reason}")]
    ConnectFailed { catalog: String, reason: String },

    #[error("Catalog is not connected")]
    NotConnected,

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Failed to fetch catalog data: {0}")]
    CatalogFetch(String),

    #[error("Invalid catalog index data: {0}")]
    InvalidCatalogData(String),

    #[error("Configuration file error: {0}")]
    ConfigFile(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiftError>;
