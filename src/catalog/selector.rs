use crate::error::SiftError;
use std::str::FromStr;

/// The caller's choice of which catalog to search against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSelector {
    /// The local installed-package catalog
    LocalInstalled,
    /// Remote catalog at this position in the registry enumeration,
    /// composited with local installed state
    RemoteByIndex(usize),
    /// Remote catalog matched by name, composited with local installed state
    RemoteByName(String),
}

impl CatalogSelector {
    /// Selector from a signed index. Negative values select the local
    /// installed catalog.
    pub fn from_signed_index(index: i64) -> Self {
        if index < 0 {
            CatalogSelector::LocalInstalled
        } else {
            CatalogSelector::RemoteByIndex(index as usize)
        }
    }
}

impl FromStr for CatalogSelector {
    type Err = SiftError;

    /// Parses a `--source` argument: an integer selects by index (negative
    /// means local installed), anything else selects by name.
    fn from_str(s: &str) -> Result<Self, SiftError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SiftError::InvalidConfig(
                "Catalog selector must not be empty".to_string(),
            ));
        }
        match s.parse::<i64>() {
            Ok(index) => Ok(CatalogSelector::from_signed_index(index)),
            Err(_) => Ok(CatalogSelector::RemoteByName(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_index_selects_local() {
        assert_eq!(
            CatalogSelector::from_signed_index(-1),
            CatalogSelector::LocalInstalled
        );
        assert_eq!(
            CatalogSelector::from_signed_index(0),
            CatalogSelector::RemoteByIndex(0)
        );
        assert_eq!(
            CatalogSelector::from_signed_index(3),
            CatalogSelector::RemoteByIndex(3)
        );
    }

    #[test]
    fn test_parse_index_and_name() {
        assert_eq!(
            "2".parse::<CatalogSelector>().unwrap(),
            CatalogSelector::RemoteByIndex(2)
        );
        assert_eq!(
            "-1".parse::<CatalogSelector>().unwrap(),
            CatalogSelector::LocalInstalled
        );
        assert_eq!(
            "winget".parse::<CatalogSelector>().unwrap(),
            CatalogSelector::RemoteByName("winget".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!("   ".parse::<CatalogSelector>().is_err());
    }
}
