use serde::Deserialize;
use tracing::debug;

use crate::{DictionaryEntry, DictionaryError, ParseError, Summary};

pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Shape of the body the service sends back when it has no entry for a word.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    title: Option<String>,
    message: Option<String>,
}

/// The word is substituted into the path as is, without any escaping.
pub fn lookup_url(base_url: &str, word: &str) -> String {
    format!("{}/{word}", base_url.trim_end_matches('/'))
}

pub(crate) async fn fetch_entries(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Vec<u8>, DictionaryError> {
    let url = lookup_url(base_url, word);
    debug!(%url, "looking up word");
    let res = client.get(&url).send().await.map_err(DictionaryError::Fetch)?;
    // status codes are not interpreted here, a 404 body still goes to the decoder
    debug!(status = %res.status(), "dictionary responded");
    let body = res.bytes().await.map_err(DictionaryError::Fetch)?;
    Ok(body.to_vec())
}

pub fn decode_entries(body: &[u8]) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    serde_json::from_slice::<Vec<DictionaryEntry>>(body).map_err(|error| {
        let reason = match serde_json::from_slice::<ApiMessage>(body) {
            Ok(ApiMessage {
                title,
                message: Some(message),
            }) => match title {
                Some(title) => format!("{title}: {message}"),
                None => message,
            },
            _ => error.to_string(),
        };
        DictionaryError::Parse(ParseError { reason })
    })
}

pub fn summarize(entries: &[DictionaryEntry]) -> Option<Summary> {
    entries.first()?.summary()
}
