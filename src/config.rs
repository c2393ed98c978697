use crate::error::{Result, SiftError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const INSTALLED_INDEX_FILE_NAME: &str = "installed.json";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiftConfig {
    #[serde(skip)]
    home: PathBuf,

    /// Remote catalogs, in enumeration order
    #[serde(default)]
    pub sources: Vec<SourceConfig>,

    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,

    pub url: String,

    /// Stable identifier; defaults to the name lowercased
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SourceConfig {
    pub fn id(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase().replace(' ', "-"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_http_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

impl SiftConfig {
    /// Load configuration from `<home>/config.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn new(home: PathBuf) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self {
                home,
                ..Self::default()
            });
        }

        let contents = fs::read_to_string(&config_path)?;
        let mut config: SiftConfig = toml::from_str(&contents)
            .map_err(|e| SiftError::ConfigFile(format!("Failed to parse config.toml: {e}")))?;
        config.home = home;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = self.home.join(CONFIG_FILE_NAME);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SiftError::ConfigFile(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn installed_index_path(&self) -> PathBuf {
        self.home.join(INSTALLED_INDEX_FILE_NAME)
    }
}

/// Resolve the pkgsift home directory and load its configuration.
///
/// `PKGSIFT_HOME` overrides the default of `~/.pkgsift`.
pub fn new_sift_config() -> Result<SiftConfig> {
    let home = match std::env::var_os("PKGSIFT_HOME") {
        Some(home) => PathBuf::from(home),
        None => dirs::home_dir()
            .ok_or(SiftError::NoHomeDirectory)?
            .join(".pkgsift"),
    };
    SiftConfig::new(home)
}
