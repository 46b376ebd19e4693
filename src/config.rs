use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Default config file, overridable with `FOLIO_CONFIG`.
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// Directory holding `data/` and `static/`.
    pub site_root: PathBuf,
    /// When set, data files are fetched over HTTP relative to this URL
    /// instead of being read from `site_root`.
    pub data_base_url: Option<String>,
    pub projects_path: String,
    pub testimonials_path: String,
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "Portfolio".to_string(),
            site_root: PathBuf::from("site"),
            data_base_url: None,
            projects_path: "data/projects.json".to_string(),
            testimonials_path: "data/testimonials.json".to_string(),
            contact_email: "hello@example.com".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(p, e) => write!(f, "cannot read {}: {}", p.display(), e),
            ConfigError::Parse(p, e) => write!(f, "invalid config {}: {}", p.display(), e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SiteConfig {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&raw).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Load `$FOLIO_CONFIG` or `folio.toml`. A missing default file yields
    /// defaults; a missing explicit file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var("FOLIO_CONFIG") {
            Ok(path) => Self::load_from(Path::new(&path)),
            Err(_) => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load_from(path)
                } else {
                    info!("No {} found, using defaults", CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }
}
