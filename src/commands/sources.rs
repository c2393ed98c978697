use crate::catalog::{CatalogRegistry, SourceRegistry};
use crate::config::SiftConfig;
use crate::error::Result;
use colored::*;
use comfy_table::{Cell, CellAlignment, Table};

pub struct SourcesCommand<'a> {
    config: &'a SiftConfig,
}

impl<'a> SourcesCommand<'a> {
    pub fn new(config: &'a SiftConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, json: bool) -> Result<()> {
        let registry = SourceRegistry::new(self.config);
        let catalogs = registry.list_remote_catalogs()?;

        if json {
            println!("{}", serde_json::to_string_pretty(&catalogs)?);
            return Ok(());
        }

        if catalogs.is_empty() {
            println!("{} No remote catalogs configured", "✗".red());
            println!(
                "\n{}: Add a [[sources]] entry to {} to register one.",
                "Solution".yellow().bold(),
                self.config.home().join("config.toml").display()
            );
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
        table.set_header(vec![
            Cell::new("Index"),
            Cell::new("Name"),
            Cell::new("Id"),
            Cell::new("URL"),
        ]);

        for (index, (info, source)) in catalogs.iter().zip(&self.config.sources).enumerate() {
            table.add_row(vec![
                Cell::new(index.to_string()).set_alignment(CellAlignment::Right),
                Cell::new(&info.name),
                Cell::new(&info.id),
                Cell::new(&source.url),
            ]);
        }

        println!("{table}");
        println!(
            "\nTotal: {} remote catalogs. Select one with 'pkgsift search --source <INDEX>'.",
            table.row_count()
        );

        Ok(())
    }
}
