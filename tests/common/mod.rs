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

/// Shared helpers for building a temporary pkgsift home
use pkgsift::models::package::PackageRecord;
use pkgsift::provider::CatalogIndexFile;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary PKGSIFT_HOME that cleans itself up on drop
pub struct TestHomeGuard {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestHomeGuard {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create test home"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a config.toml declaring the given remote sources
    pub fn write_config(&self, sources: &[(&str, &str)]) {
        let mut contents = String::new();
        for (name, url) in sources {
            contents.push_str(&format!("[[sources]]\nname = \"{name}\"\nurl = \"{url}\"\n\n"));
        }
        fs::write(self.path().join("config.toml"), contents).unwrap();
    }

    /// Write the installed-package index
    pub fn write_installed_index(&self, packages: Vec<PackageRecord>) {
        let index = CatalogIndexFile::new(packages);
        let file = fs::File::create(self.path().join("installed.json")).unwrap();
        serde_json::to_writer_pretty(file, &index).unwrap();
    }
}

#[allow(dead_code)]
pub fn installed_record(id: &str, name: &str) -> PackageRecord {
    PackageRecord {
        id: id.to_string(),
        name: name.to_string(),
        moniker: None,
        tags: Vec::new(),
        commands: Vec::new(),
        package_family_name: None,
        product_code: None,
        versions: vec!["1.0.0".to_string()],
        default_install_version: None,
    }
}
