use std::io;

use dictionary::DictionaryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("word store is unreachable: {0}")]
    Connection(#[from] sqlx::Error),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("{0}")]
    NotFound(String),

    #[error("bundled word list is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Coarse classification used when reporting a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Connection,
    NotFound,
    Parse,
    Validation,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Connection(_) => ErrorKind::Connection,
            Error::Dictionary(DictionaryError::Fetch(_)) => ErrorKind::Connection,
            Error::Dictionary(DictionaryError::Parse(_)) => ErrorKind::Parse,
            Error::Dictionary(DictionaryError::NotFound(_)) => ErrorKind::NotFound,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use dictionary::{Dictionary, Lookup, NotFoundError, ParseError};

    #[test]
    fn test_dictionary_errors_are_classified() {
        let parse = Error::from(DictionaryError::Parse(ParseError {
            reason: "not an array".to_string(),
        }));
        assert_eq!(parse.kind(), ErrorKind::Parse);

        let missing = Error::from(DictionaryError::NotFound(NotFoundError {
            word: "qwzx".to_string(),
        }));
        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert_eq!(missing.to_string(), "no definition found for 'qwzx'");
    }

    #[test]
    fn test_store_errors_are_connection_errors() {
        assert_eq!(Error::from(sqlx::Error::PoolClosed).kind(), ErrorKind::Connection);
    }

    #[tokio::test]
    async fn test_unreachable_dictionary_is_a_connection_error() {
        let error = Dictionary::with_base_url("http://127.0.0.1:1")
            .get_definition("brisk")
            .await
            .unwrap_err();
        assert!(matches!(error, DictionaryError::Fetch(_)));
        assert_eq!(Error::from(error).kind(), ErrorKind::Connection);
    }
}
