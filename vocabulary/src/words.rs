use std::collections::HashSet;

use tracing::debug;

use crate::{
    config::SourceKind,
    error::{Error, Result},
    storage::Storage,
};

const BUNDLED_WORDS: &str = include_str!("../assets/words.json");

/// A JSON array of words, the one shipped with the binary unless replaced.
#[derive(Debug, Clone)]
pub struct WordList {
    raw: String,
}

impl WordList {
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_WORDS)
    }

    pub fn from_json(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn decode(&self) -> Result<Vec<String>> {
        let words: Vec<String> = serde_json::from_str(&self.raw)?;
        if words.is_empty() {
            return Err(Error::NotFound("the word list is empty".to_string()));
        }
        Ok(words)
    }
}

pub struct WordSource {
    kind: SourceKind,
    list: WordList,
}

impl WordSource {
    pub fn new(kind: SourceKind, list: WordList) -> Self {
        Self { kind, list }
    }

    pub async fn candidates(&self, storage: Option<&Storage>) -> Result<Vec<String>> {
        let words = match self.kind {
            SourceKind::Bundled => self.list.decode()?,
            SourceKind::Stored => {
                let stored = stored_words(storage).await?;
                if stored.is_empty() {
                    return Err(Error::NotFound("no words have been added yet".to_string()));
                }
                stored
            }
            SourceKind::Combined => {
                let mut words = self.list.decode()?;
                words.extend(stored_words(storage).await?);
                let mut seen = HashSet::new();
                words.retain(|word| seen.insert(word.clone()));
                words
            }
        };
        debug!(source = ?self.kind, count = words.len(), "collected candidate words");
        Ok(words)
    }
}

async fn stored_words(storage: Option<&Storage>) -> Result<Vec<String>> {
    let storage = storage.ok_or_else(|| {
        Error::Config("this word source needs DATABASE_URL to be set".to_string())
    })?;
    Ok(storage
        .all_words()
        .await?
        .into_iter()
        .map(|word| word.text)
        .collect())
}
