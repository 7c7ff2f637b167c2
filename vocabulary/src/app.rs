use std::io::Write;

use dictionary::Lookup;
use rand::RngCore;
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    picker::Picker,
    presenter::Presenter,
    storage::{Storage, StoredWord},
    utilities::normalize_word,
    words::WordSource,
};

/// Everything a command needs, built once at start up and torn down at exit.
pub struct App {
    lookup: Box<dyn Lookup>,
    storage: Option<Storage>,
    source: WordSource,
    presenter: Presenter,
}

impl App {
    pub fn new(
        lookup: Box<dyn Lookup>,
        storage: Option<Storage>,
        source: WordSource,
        presenter: Presenter,
    ) -> Self {
        Self {
            lookup,
            storage,
            source,
            presenter,
        }
    }

    /// Picks today's word and prints its meaning.
    pub async fn today<R: RngCore>(&self, picker: &mut Picker<R>, out: &mut impl Write) -> Result<()> {
        let words = self.source.candidates(self.storage.as_ref()).await?;
        let word = picker.pick(&words)?;
        debug!(word, "picked today's word");
        self.define(word, out).await
    }

    pub async fn translate(&self, word: &str, out: &mut impl Write) -> Result<()> {
        let word = normalize_word(word)?;
        self.define(word, out).await
    }

    pub async fn add(&self, word: &str) -> Result<StoredWord> {
        let word = normalize_word(word)?;
        let storage = self.storage()?;
        let stored = StoredWord::new(word);
        storage.insert(&stored).await?;
        Ok(stored)
    }

    pub async fn list(&self, out: &mut impl Write) -> Result<()> {
        let words = self.storage()?.all_words().await?;
        if words.is_empty() {
            writeln!(out, "No words have been added yet.")?;
            return Ok(());
        }
        self.presenter.present_list(&words, out)?;
        Ok(())
    }

    pub async fn shutdown(self) {
        if let Some(storage) = self.storage {
            storage.close().await;
            info!("closed word store");
        }
    }

    async fn define(&self, word: &str, out: &mut impl Write) -> Result<()> {
        let summary = self.lookup.get_definition(word).await?;
        self.presenter.present(&summary, out)?;
        Ok(())
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| Error::Config("adding and listing words needs DATABASE_URL to be set".to_string()))
    }
}
