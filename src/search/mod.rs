mod client;
mod filter;
mod models;


pub use client::CatalogSearchClient;
pub use filter::{MatchField, MatchOption, SearchFilter, SearchFilterSet, SearchFilterSetBuilder};
pub use models::SearchMatches;
