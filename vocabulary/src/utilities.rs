use crate::error::{Error, Result};

/// Trims a word given on the command line, refusing one that ends up empty.
pub fn normalize_word(input: &str) -> Result<&str> {
    let word = input.trim();
    if word.is_empty() {
        return Err(Error::Validation("cannot use an empty word".to_string()));
    }
    Ok(word)
}
