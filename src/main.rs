// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use pkgsift::commands::search::SearchCommand;
use pkgsift::commands::sources::SourcesCommand;
use pkgsift::config::new_sift_config;
use pkgsift::error::{Result, format_error_chain, get_exit_code};
use pkgsift::logging;

#[derive(Parser)]
#[command(name = "pkgsift")]
#[command(author, version, about = "Package catalog discovery and search", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a package catalog
    #[command(visible_alias = "s")]
    Search {
        /// Query string; omit to list every package in the catalog
        query: Option<String>,

        /// Remote catalog to search, by index or name; a negative index or
        /// no value selects the local installed catalog
        #[arg(long, allow_hyphen_values = true)]
        source: Option<String>,

        /// Package field the query matches against
        #[arg(long, default_value = "id")]
        field: String,

        /// Match operator (exact, case-insensitive, starts-with, contains)
        #[arg(long = "match", default_value = "contains")]
        match_option: String,

        /// Output matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// List configured remote catalogs
    #[command(visible_alias = "ls")]
    Sources {
        /// Output catalogs as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let config = match new_sift_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let result: Result<()> = (|| {
        match cli.command {
            Commands::Search {
                query,
                source,
                field,
                match_option,
                json,
            } => {
                let command = SearchCommand::new(&config)?;
                command.execute(
                    query.as_deref(),
                    source.as_deref(),
                    &field,
                    &match_option,
                    json,
                )
            }
            Commands::Sources { json } => {
                let command = SourcesCommand::new(&config)?;
                command.execute(json)
            }
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
