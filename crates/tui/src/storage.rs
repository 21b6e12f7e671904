use std::{collections::BTreeMap, fs::File, io::ErrorKind};

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use course_admin_client::Token;
use serde::{Deserialize, Serialize};

use crate::config::{dirs, utf8};

/// Key the bearer token is stored under
pub const TOKEN_KEY: &str = "token";

/// Persistent string key/value storage, kept in the user's data directory
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalStorage {
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    pub fn path() -> Result<Utf8PathBuf> {
        utf8(dirs()?.place_data_file("storage.json")?)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from the given file. A missing file is the same as an empty one.
    pub fn load_from(path: &Utf8Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e).context("error opening local storage"),
        };

        serde_json::from_reader(&file).context("error deserialising local storage")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Utf8Path) -> Result<()> {
        let mut file = File::create(path).context("error creating local storage")?;
        serde_json::to_writer(&mut file, &self).context("error serialising local storage")?;

        Ok(())
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(|v| v.as_str())
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }

    /// The stored bearer token, if any
    pub fn token(&self) -> Option<Token> {
        self.get_item(TOKEN_KEY).map(Token::from)
    }

    pub fn set_token(&mut self, token: Token) {
        self.set_item(TOKEN_KEY, token);
    }
}
