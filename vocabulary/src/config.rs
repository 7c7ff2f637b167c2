use std::env;

use clap::ValueEnum;
use dictionary::DEFAULT_API_URL;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Where today's candidate words come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Only the word list shipped with the binary
    Bundled,
    /// Only the words added with `add`
    Stored,
    /// The bundled list followed by the stored words
    Combined,
}

impl SourceKind {
    pub fn needs_storage(self) -> bool {
        !matches!(self, SourceKind::Bundled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: Option<String>,
    pub source: SourceKind,
    pub dictionary_url: String,
}

impl Config {
    /// Builds the configuration from a variable lookup, `env::var` in production.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = var("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let source = match var("VOCABULARY_WORD_SOURCE") {
            Some(value) => SourceKind::from_str(value.trim(), true)
                .map_err(|_| Error::Config(format!("Invalid VOCABULARY_WORD_SOURCE '{value}'")))?,
            None if database_url.is_some() => SourceKind::Combined,
            None => SourceKind::Bundled,
        };

        let dictionary_url = var("DICTIONARY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            database_url,
            source,
            dictionary_url,
        })
    }

    /// The connection string, required by anything that touches the store.
    pub fn require_database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .ok_or_else(|| Error::Config("Missing DATABASE_URL".to_string()))
    }
}

pub fn load_config() -> Result<Config> {
    info!("Loading configuration");

    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env file"),
        Err(error) if error.not_found() => debug!("no .env file, using the process environment"),
        Err(error) => return Err(Error::Config(format!("Failed to read .env file: {error}"))),
    }

    Config::from_vars(|key| env::var(key).ok())
}
