use crate::cancel::{self, CancelToken};
use crate::catalog::{CatalogRegistry, CatalogSelector, SourceRegistry};
use crate::config::SiftConfig;
use crate::error::Result;
use crate::models::package::PackageMatch;
use crate::search::{CatalogSearchClient, MatchField, MatchOption, SearchFilterSet};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct SearchCommand<'a> {
    config: &'a SiftConfig,
}

impl<'a> SearchCommand<'a> {
    pub fn new(config: &'a SiftConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(
        &self,
        query: Option<&str>,
        source: Option<&str>,
        field: &str,
        match_option: &str,
        json: bool,
    ) -> Result<()> {
        let selector = match source {
            None => CatalogSelector::LocalInstalled,
            Some(arg) => arg.parse::<CatalogSelector>()?,
        };

        // No query means the match-everything baseline
        let filters = match query {
            None => SearchFilterSet::match_all(),
            Some(q) => SearchFilterSet::builder()
                .add_filter(
                    field.parse::<MatchField>()?,
                    match_option.parse::<MatchOption>()?,
                    q,
                )
                .build(),
        };

        let registry = SourceRegistry::new(self.config);

        if !json {
            if let Some(name) = selected_catalog_name(&registry, &selector)? {
                println!("Searching on package catalog {name}");
            }
        }

        let cancel = CancelToken::new();
        cancel::cancel_on_interrupt(&cancel)?;
        let client = CatalogSearchClient::new(registry).with_cancel_token(cancel);

        let spinner = (!json).then(|| {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            spinner.set_message("Connecting to catalog...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        });

        let result = client.search(&selector, &filters);

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let matches = result?;

        if json {
            let all: Vec<PackageMatch> = matches.collect();
            println!("{}", serde_json::to_string_pretty(&all)?);
            return Ok(());
        }

        println!("Begin enumeration");
        for m in matches {
            if m.available_online {
                let source_name = m.source_online_catalog_name.as_deref().unwrap_or_default();
                println!(
                    "Package {} is available Online: {}",
                    m.package_name, source_name
                );
            }
        }
        println!("End enumeration");

        Ok(())
    }
}

/// Name to announce before connecting, for remote selections only.
/// The enumeration here is for display; the client re-resolves on its own.
fn selected_catalog_name(
    registry: &SourceRegistry<'_>,
    selector: &CatalogSelector,
) -> Result<Option<String>> {
    match selector {
        CatalogSelector::LocalInstalled => Ok(None),
        CatalogSelector::RemoteByIndex(index) => {
            let catalogs = registry.list_remote_catalogs()?;
            Ok(catalogs.get(*index).map(|c| c.name.clone()))
        }
        CatalogSelector::RemoteByName(name) => Ok(Some(name.clone())),
    }
}
