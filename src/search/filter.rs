use crate::error::{Result, SiftError};
use crate::models::package::PackageRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Package field a match filter targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Id,
    Name,
    Moniker,
    Tag,
    Command,
    PackageFamilyName,
    ProductCode,
}

impl FromStr for MatchField {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "id" => Ok(MatchField::Id),
            "name" => Ok(MatchField::Name),
            "moniker" => Ok(MatchField::Moniker),
            "tag" => Ok(MatchField::Tag),
            "command" => Ok(MatchField::Command),
            "package-family-name" | "package_family_name" => Ok(MatchField::PackageFamilyName),
            "product-code" | "product_code" => Ok(MatchField::ProductCode),
            _ => Err(SiftError::InvalidConfig(format!(
                "Unknown match field: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for MatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field = match self {
            MatchField::Id => "id",
            MatchField::Name => "name",
            MatchField::Moniker => "moniker",
            MatchField::Tag => "tag",
            MatchField::Command => "command",
            MatchField::PackageFamilyName => "package-family-name",
            MatchField::ProductCode => "product-code",
        };
        write!(f, "{field}")
    }
}

/// How a filter value is compared against a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOption {
    /// Case-sensitive equality
    Exact,
    /// Case-insensitive equality
    CaseInsensitive,
    /// Case-insensitive prefix match
    StartsWith,
    /// Case-insensitive substring match; an empty value matches everything
    CaseInsensitiveContains,
}

impl FromStr for MatchOption {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(MatchOption::Exact),
            "case-insensitive" | "case_insensitive" => Ok(MatchOption::CaseInsensitive),
            "starts-with" | "starts_with" => Ok(MatchOption::StartsWith),
            "contains" | "case-insensitive-contains" | "case_insensitive_contains" => {
                Ok(MatchOption::CaseInsensitiveContains)
            }
            _ => Err(SiftError::InvalidConfig(format!(
                "Unknown match option: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for MatchOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let option = match self {
            MatchOption::Exact => "exact",
            MatchOption::CaseInsensitive => "case-insensitive",
            MatchOption::StartsWith => "starts-with",
            MatchOption::CaseInsensitiveContains => "contains",
        };
        write!(f, "{option}")
    }
}

/// A single field/operator/value predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub field: MatchField,
    pub option: MatchOption,
    pub value: String,
}

impl SearchFilter {
    pub fn new(field: MatchField, option: MatchOption, value: impl Into<String>) -> Self {
        Self {
            field,
            option,
            value: value.into(),
        }
    }

    fn value_matches(&self, candidate: &str) -> bool {
        match self.option {
            MatchOption::Exact => candidate == self.value,
            MatchOption::CaseInsensitive => candidate.to_lowercase() == self.value.to_lowercase(),
            MatchOption::StartsWith => candidate
                .to_lowercase()
                .starts_with(&self.value.to_lowercase()),
            MatchOption::CaseInsensitiveContains => candidate
                .to_lowercase()
                .contains(&self.value.to_lowercase()),
        }
    }

    /// Whether `record` satisfies this predicate.
    ///
    /// Multi-valued fields (tags, commands) match if any element matches;
    /// optional fields the record omits never match.
    pub fn matches(&self, record: &PackageRecord) -> bool {
        match self.field {
            MatchField::Id => self.value_matches(&record.id),
            MatchField::Name => self.value_matches(&record.name),
            MatchField::Moniker => record
                .moniker
                .as_deref()
                .is_some_and(|m| self.value_matches(m)),
            MatchField::Tag => record.tags.iter().any(|t| self.value_matches(t)),
            MatchField::Command => record.commands.iter().any(|c| self.value_matches(c)),
            MatchField::PackageFamilyName => record
                .package_family_name
                .as_deref()
                .is_some_and(|n| self.value_matches(n)),
            MatchField::ProductCode => record
                .product_code
                .as_deref()
                .is_some_and(|p| self.value_matches(p)),
        }
    }
}

/// An immutable, ordered set of filters combined with OR semantics:
/// a package matches the set if it satisfies any one filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilterSet {
    filters: Vec<SearchFilter>,
}

impl SearchFilterSet {
    pub fn builder() -> SearchFilterSetBuilder {
        SearchFilterSetBuilder {
            filters: Vec::new(),
        }
    }

    /// The match-everything baseline: one empty-value contains filter on Id.
    pub fn match_all() -> Self {
        Self::builder()
            .add_filter(MatchField::Id, MatchOption::CaseInsensitiveContains, "")
            .build()
    }

    pub fn filters(&self) -> &[SearchFilter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// OR across filters. A set with no filters matches nothing.
    pub fn matches(&self, record: &PackageRecord) -> bool {
        self.filters.iter().any(|f| f.matches(record))
    }
}

pub struct SearchFilterSetBuilder {
    filters: Vec<SearchFilter>,
}

impl SearchFilterSetBuilder {
    pub fn add_filter(
        mut self,
        field: MatchField,
        option: MatchOption,
        value: impl Into<String>,
    ) -> Self {
        self.filters.push(SearchFilter::new(field, option, value));
        self
    }

    pub fn build(self) -> SearchFilterSet {
        SearchFilterSet {
            filters: self.filters,
        }
    }
}
