//! Decoding of wordbook API response bodies.
//!
//! An empty, blank or `null` body is a normal "nothing found" answer and
//! decodes to an empty collection. Anything else that is not the expected
//! JSON shape is a [`ClientError::Decode`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::definition::DefinitionBundle;
use crate::dictionary::DictionaryMeta;
use crate::error::{ClientError, Result};
use crate::suggestion::SuggestionEntry;

pub fn decode_suggestions(body: &str) -> Result<Vec<SuggestionEntry>> {
    let Some(json) = decode_json::<SuggestionsJson>(body, "suggestions")? else {
        return Ok(Vec::new());
    };

    Ok(json
        .suggestions
        .unwrap_or_default()
        .into_iter()
        .map(SuggestionEntry::from)
        .collect())
}

pub fn decode_dictionaries(body: &str) -> Result<Vec<DictionaryMeta>> {
    Ok(decode_json::<Vec<DictionaryMeta>>(body, "dictionaries")?.unwrap_or_default())
}

pub fn decode_definitions(body: &str) -> Result<DefinitionBundle> {
    Ok(decode_json::<DefinitionBundle>(body, "definitions")?.unwrap_or_default())
}

fn decode_json<T: DeserializeOwned>(body: &str, target: &'static str) -> Result<Option<T>> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str::<Option<T>>(body).map_err(|source| ClientError::Decode { target, source })
}

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Wire structures for `/suggestions`
#[derive(Debug, Deserialize)]
struct SuggestionsJson {
    #[serde(default)]
    suggestions: Option<Vec<SuggestionJson>>,
}

#[derive(Debug, Deserialize)]
struct SuggestionJson {
    #[serde(default)]
    value: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    data: SuggestionDataJson,
}

#[derive(Debug, Default, Deserialize)]
struct SuggestionDataJson {
    #[serde(default, deserialize_with = "nullable")]
    word_id: u64,
    #[serde(default, deserialize_with = "nullable")]
    word: String,
    #[serde(default, deserialize_with = "nullable")]
    language: String,
    #[serde(default, deserialize_with = "nullable")]
    language_id: u32,
}

impl From<SuggestionJson> for SuggestionEntry {
    fn from(json: SuggestionJson) -> Self {
        let data = json.data;
        SuggestionEntry {
            word_id: data.word_id,
            word: json.value.unwrap_or(data.word),
            source_language_name: data.language,
            source_language_id: data.language_id,
        }
    }
}
