use std::io::{self, Write};

use console::Style;
use dictionary::Summary;

use crate::storage::StoredWord;

pub struct Presenter {
    highlight: Style,
}

impl Presenter {
    pub fn new(highlight: Style) -> Self {
        Self { highlight }
    }

    /// No styling at all, for pipes and tests.
    pub fn plain() -> Self {
        Self::new(Style::new())
    }

    /// Yellow headline, dropped by `console` when stdout is not a terminal.
    pub fn terminal() -> Self {
        Self::new(Style::new().yellow().bold())
    }

    pub fn present(&self, summary: &Summary, out: &mut impl Write) -> io::Result<()> {
        let headline = format!("Word: {}", summary.word.to_uppercase());
        writeln!(out, "{}", self.highlight.apply_to(headline))?;
        writeln!(out, "Meaning: {}", summary.definition)?;
        if let Some(example) = summary.example.as_deref().filter(|example| !example.is_empty()) {
            writeln!(out, "Example: {example}")?;
        }
        Ok(())
    }

    pub fn present_list(&self, words: &[StoredWord], out: &mut impl Write) -> io::Result<()> {
        for word in words {
            writeln!(
                out,
                "{}  {}",
                word.created_at.format("%Y-%m-%d"),
                self.highlight.apply_to(&word.text)
            )?;
        }
        Ok(())
    }
}
