use async_trait::async_trait;
use thiserror::Error;

mod dictionary;
mod dictionary_api;

pub use dictionary::{
    DictionaryEntry, License, PartOfSpeech, Phonetic, Summary, WordDefinition, WordMeaning,
};
pub use dictionary_api::{decode_entries, lookup_url, summarize, DEFAULT_API_URL};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary service: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("unexpected dictionary response: {0}")]
    Parse(ParseError),
    #[error(transparent)]
    NotFound(NotFoundError),
}

#[derive(Debug, Error)]
#[error("{reason}")]
pub struct ParseError {
    pub reason: String,
}

#[derive(Debug, Error)]
#[error("no definition found for '{word}'")]
pub struct NotFoundError {
    pub word: String,
}

/// Anything that can answer a word lookup with a raw response body.
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn fetch(&self, word: &str) -> Result<Vec<u8>, DictionaryError>;

    async fn get_definition(&self, word: &str) -> Result<Summary, DictionaryError> {
        let body = self.fetch(word).await?;
        let entries = decode_entries(&body)?;
        summarize(&entries).ok_or_else(|| {
            DictionaryError::NotFound(NotFoundError {
                word: word.to_owned(),
            })
        })
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Lookup for Dictionary {
    async fn fetch(&self, word: &str) -> Result<Vec<u8>, DictionaryError> {
        dictionary_api::fetch_entries(&self.client, &self.base_url, word).await
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    struct Canned(&'static str);

    #[async_trait]
    impl Lookup for Canned {
        async fn fetch(&self, _word: &str) -> Result<Vec<u8>, DictionaryError> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    #[tokio::test]
    async fn test_get_definition_without_meanings_is_not_found() {
        let lookup = Canned(r#"[{"word":"hollow","meanings":[]}]"#);
        match lookup.get_definition("hollow").await {
            Err(DictionaryError::NotFound(error)) => assert_eq!(error.word, "hollow"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_definition_passes_parse_errors_through() {
        let lookup = Canned(r#"{"title":"No Definitions Found","message":"Sorry pal"}"#);
        assert!(matches!(
            lookup.get_definition("qwzx").await,
            Err(DictionaryError::Parse(_))
        ));
    }

    /// Serves a single request with the given status line and body.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = socket.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{address}/api/v2/entries/en")
    }

    #[tokio::test]
    async fn test_not_found_status_still_reaches_the_decoder() {
        let base_url = serve_once(
            "404 Not Found",
            r#"{"title":"No Definitions Found","message":"Sorry pal","resolution":"Try again"}"#,
        )
        .await;
        match Dictionary::with_base_url(base_url).get_definition("qwzx").await {
            Err(DictionaryError::Parse(error)) => {
                assert_eq!(error.reason, "No Definitions Found: Sorry pal")
            }
            other => panic!("Expected a parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_definition_over_http() {
        let base_url = serve_once(
            "200 OK",
            r#"[{"word":"brisk","meanings":[{"definitions":[{"definition":"quick","example":"a brisk walk"}]}]}]"#,
        )
        .await;
        let summary = Dictionary::with_base_url(base_url)
            .get_definition("brisk")
            .await
            .unwrap();
        assert_eq!(summary.word, "brisk");
        assert_eq!(summary.definition, "quick");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_fetch_error() {
        let result = Dictionary::with_base_url("http://127.0.0.1:1").fetch("brisk").await;
        assert!(matches!(result, Err(DictionaryError::Fetch(_))));
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(Dictionary::new().base_url(), DEFAULT_API_URL);
    }
}
