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

use crate::error::SiftError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a SiftError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a SiftError) -> Self {
        let (suggestion, details) = match error {
            SiftError::CatalogIndexOutOfRange { index, available } => {
                let suggestion = Some(
                    "Run 'pkgsift sources' to list the configured remote catalogs and their \
                     indexes."
                        .to_string(),
                );
                let details = Some(format!(
                    "Requested index {index}, but only {available} remote catalogs are configured."
                ));
                (suggestion, details)
            }
            SiftError::CatalogNotFound(name) => {
                let suggestion = Some(
                    "Run 'pkgsift sources' to list the configured remote catalogs, or add the \
                     catalog to config.toml under [[sources]]."
                        .to_string(),
                );
                let details = Some(format!("No configured catalog matches '{name}'."));
                (suggestion, details)
            }
            SiftError::AmbiguousCatalogName { name, .. } => {
                let suggestion = Some(format!(
                    "Select the catalog by index instead: 'pkgsift search --source <INDEX>'. \
                     Duplicate '{name}' entries can be renamed in config.toml."
                ));
                let details = None;
                (suggestion, details)
            }
            SiftError::ConnectFailed { .. } => {
                let suggestion = Some(
                    "Check your internet connection and the catalog URL in config.toml, then try \
                     again."
                        .to_string(),
                );
                let details = None;
                (suggestion, details)
            }
            SiftError::CatalogFetch(msg) => {
                let suggestion = Some(
                    "Check your internet connection and try again. The catalog server may be \
                     temporarily unavailable."
                        .to_string(),
                );
                let details = Some(format!("Fetch failed: {msg}"));
                (suggestion, details)
            }
            SiftError::ConfigFile(msg) | SiftError::InvalidConfig(msg) => {
                let suggestion = Some(
                    "Check the syntax of config.toml. Remote catalogs are declared as:\n  \
                     [[sources]]\n  name = \"example\"\n  url = \"https://example.com/catalog\""
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            SiftError::NoHomeDirectory => {
                let suggestion =
                    Some("Set PKGSIFT_HOME to a writable directory.".to_string());
                let details = None;
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
