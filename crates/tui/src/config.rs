use std::{fs::File, str::FromStr, time::Duration};

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use course_admin_client::{Client, Token, DEFAULT_BASE};
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use xdg::BaseDirectories;

/// Prefix for everything we put in the XDG directories
pub const APP_PREFIX: &str = "course-admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the catalog API. Course paths are appended to this.
    pub base_url: String,

    /// Seconds before an in-flight request is abandoned
    pub timeout_secs: u64,

    /// One of off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE.to_string(),
            timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from the user's config directory, falling back to defaults if there isn't a config file
    pub fn load() -> Result<Self> {
        let Some(path) = dirs()?.find_config_file("config.json") else {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        };

        Self::load_from(&utf8(path)?)
    }

    pub fn load_from(path: &Utf8Path) -> Result<Self> {
        let file = File::open(path).context("error opening config file")?;
        let config = serde_json::from_reader(&file).context("error deserialising config file")?;

        Ok(config)
    }

    pub fn log_level(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| anyhow!("unknown log level {:?}", self.log_level))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a client for the configured server
    pub fn client(&self, token: Option<Token>) -> Result<Client> {
        Client::with_timeout(&self.base_url, token, self.timeout())
            .context("error building http client")
    }
}

pub fn dirs() -> Result<BaseDirectories> {
    Ok(BaseDirectories::with_prefix(APP_PREFIX)?)
}

pub fn utf8(path: std::path::PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).map_err(|p| anyhow!("path is not utf-8: {}", p.display()))
}
