use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a catalog's data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    /// The local installed-package index
    Installed,
    /// A single remote source
    Remote,
    /// A remote source combined with local installed state
    Composite,
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = match self {
            CatalogOrigin::Installed => "installed",
            CatalogOrigin::Remote => "remote",
            CatalogOrigin::Composite => "composite",
        };
        write!(f, "{origin}")
    }
}

/// Identity of a package catalog as reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    /// Stable identifier, unique within one registry enumeration
    pub id: String,

    /// Human-readable name; not guaranteed unique across catalogs
    pub name: String,

    pub origin: CatalogOrigin,
}

impl CatalogInfo {
    pub fn installed() -> Self {
        Self {
            id: "installed".to_string(),
            name: "Installed Packages".to_string(),
            origin: CatalogOrigin::Installed,
        }
    }

    pub fn remote(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            origin: CatalogOrigin::Remote,
        }
    }

    /// Identity of a composite catalog built around a remote source.
    ///
    /// The composite keeps the remote catalog's name so output lines
    /// attribute availability to the source the user selected.
    pub fn composite_of(remote: &CatalogInfo) -> Self {
        Self {
            id: format!("composite-{}", remote.id),
            name: remote.name.clone(),
            origin: CatalogOrigin::Composite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_keeps_remote_name() {
        let remote = CatalogInfo::remote("main", "ExampleSource");
        let composite = CatalogInfo::composite_of(&remote);

        assert_eq!(composite.name, "ExampleSource");
        assert_eq!(composite.id, "composite-main");
        assert_eq!(composite.origin, CatalogOrigin::Composite);
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(CatalogOrigin::Installed.to_string(), "installed");
        assert_eq!(CatalogOrigin::Composite.to_string(), "composite");
    }
}
