use serde::{Deserialize, Serialize};

/// A package entry as stored in a catalog index.
///
/// Every field a match filter can target is carried here; optional fields
/// that an index omits simply never match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moniker: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Command names the package puts on PATH
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_family_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<String>,

    /// The version an install would resolve to. A remote entry without one
    /// is listed but not installable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_install_version: Option<String>,
}

impl PackageRecord {
    pub fn is_installable(&self) -> bool {
        self.default_install_version.is_some()
    }
}

/// A single search result. Value type: carries no reference back to the
/// handle or snapshot that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMatch {
    pub package_id: String,

    pub package_name: String,

    /// True iff some online source can resolve an installable version
    pub available_online: bool,

    /// Set only when `available_online` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_online_catalog_name: Option<String>,
}

impl PackageMatch {
    /// A match with no online availability (purely local catalogs).
    pub fn local(record: &PackageRecord) -> Self {
        Self {
            package_id: record.id.clone(),
            package_name: record.name.clone(),
            available_online: false,
            source_online_catalog_name: None,
        }
    }

    /// A match with an installable version resolvable from `catalog_name`.
    pub fn online(record: &PackageRecord, catalog_name: impl Into<String>) -> Self {
        Self {
            package_id: record.id.clone(),
            package_name: record.name.clone(),
            available_online: true,
            source_online_catalog_name: Some(catalog_name.into()),
        }
    }
}
