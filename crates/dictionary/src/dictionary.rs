use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// One entry of a dictionary lookup. The service answers with a list of these.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    #[serde(default)]
    pub part_of_speech: PartOfSpeech,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<Value>,
    #[serde(default)]
    pub antonyms: Vec<Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Other => "other",
        };
        f.write_str(tag)
    }
}

/// Synonyms and antonyms are kept as raw JSON values, nothing reads them yet.
#[derive(Debug, Clone, Deserialize)]
pub struct WordDefinition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<Value>,
    #[serde(default)]
    pub antonyms: Vec<Value>,
}

/// The headline of a lookup: the first definition of the first meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub word: String,
    pub part_of_speech: PartOfSpeech,
    pub definition: String,
    pub example: Option<String>,
}

impl DictionaryEntry {
    pub fn summary(&self) -> Option<Summary> {
        let meaning = self.meanings.first()?;
        let definition = meaning.definitions.first()?;
        Some(Summary {
            word: self.word.clone(),
            part_of_speech: meaning.part_of_speech,
            definition: definition.definition.clone(),
            example: definition.example.clone(),
        })
    }
}
