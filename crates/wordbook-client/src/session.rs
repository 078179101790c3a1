use std::fmt;
use std::sync::Arc;

use wordbook_config::api::ApiConfig;

use crate::decode::{decode_definitions, decode_dictionaries, decode_suggestions};
use crate::definition::DefinitionBundle;
use crate::dictionary::{DictionaryCatalog, DictionaryRecord, is_valid_dictionary_id};
use crate::error::{Result, TransportError};
use crate::query::Query;
use crate::suggestion::Suggestion;
use crate::transport::{HttpTransport, Transport};

pub const DICTIONARIES_PATH: &str = "/dictionaries";
pub const SUGGESTIONS_PATH: &str = "/suggestions";
pub const DEFINITIONS_PATH: &str = "/definitions";

/// Handle to the wordbook API.
///
/// Cheap to clone; every clone shares one transport and configuration.
/// Records returned from this session keep a clone so they can fetch more
/// data later.
#[derive(Clone)]
pub struct ClientSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    api: ApiConfig,
    transport: Box<dyn Transport>,
}

impl ClientSession {
    /// Session over HTTP with the configured base url and user agent
    pub fn new(api: ApiConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&api)?;
        Ok(Self::with_transport(api, transport))
    }

    pub fn with_transport(api: ApiConfig, transport: impl Transport + 'static) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                api,
                transport: Box::new(transport),
            }),
        }
    }

    pub fn api(&self) -> &ApiConfig {
        &self.inner.api
    }

    /// All dictionaries the server knows about
    pub async fn list_dictionaries(&self) -> Result<DictionaryCatalog> {
        let body = self.get(&Query::new(DICTIONARIES_PATH)).await?;
        let metas = decode_dictionaries(&body)?;
        tracing::debug!("Decoded {} dictionaries", metas.len());

        Ok(DictionaryCatalog::new(
            metas
                .into_iter()
                .map(|meta| DictionaryRecord::new(meta, self.clone()))
                .collect(),
        ))
    }

    /// Candidate matches for `query`, optionally limited to one dictionary.
    ///
    /// An invalid `dictionary_id` is ignored rather than rejected.
    pub async fn list_suggestions(
        &self,
        query: &str,
        dictionary_id: Option<&str>,
    ) -> Result<Vec<Suggestion>> {
        let body = self.get(&suggestions_query(query, dictionary_id)).await?;
        let entries = decode_suggestions(&body)?;
        tracing::debug!("Decoded {} suggestions for {query:?}", entries.len());

        Ok(entries
            .into_iter()
            .map(|entry| Suggestion::new(entry, self.clone()))
            .collect())
    }

    /// Definitions for a word, by id when `word_id > 0`, otherwise by text.
    ///
    /// Zero language ids and blank words are left out of the request.
    pub async fn definitions(
        &self,
        word_id: u64,
        word: Option<&str>,
        source_language_id: u32,
        dest_language_id: u32,
    ) -> Result<DefinitionBundle> {
        let query = definitions_query(word_id, word, source_language_id, dest_language_id);
        let body = self.get(&query).await?;
        let bundle = decode_definitions(&body)?;
        tracing::debug!("Decoded definitions from {} dictionaries", bundle.len());
        Ok(bundle)
    }

    async fn get(&self, query: &Query) -> Result<String> {
        let url = self.inner.api.endpoint(&query.encode());
        tracing::debug!("GET {url}");
        Ok(self.inner.transport.get(&url).await?)
    }
}

impl fmt::Debug for ClientSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSession")
            .field("base_url", &self.inner.api.base_url)
            .finish_non_exhaustive()
    }
}

pub fn suggestions_query(query: &str, dictionary_id: Option<&str>) -> Query {
    let mut request = Query::new(SUGGESTIONS_PATH).param("query", query);
    if let Some(id) = dictionary_id.filter(|id| is_valid_dictionary_id(id)) {
        request = request.param("language", id);
    }
    request
}

pub fn definitions_query(
    word_id: u64,
    word: Option<&str>,
    source_language_id: u32,
    dest_language_id: u32,
) -> Query {
    let mut request = Query::new(DEFINITIONS_PATH);
    if word_id > 0 {
        request = request.param("id", word_id.to_string());
    } else if let Some(word) = word.filter(|w| !w.trim().is_empty()) {
        request = request.param("word", word);
    }
    if source_language_id > 0 {
        request = request.param("src_language_id", source_language_id.to_string());
    }
    if dest_language_id > 0 {
        request = request.param("dest_language_id", dest_language_id.to_string());
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_id_wins_over_word() {
        let query = definitions_query(5, Some("ignored"), 0, 0);
        assert_eq!(query.params(), &[("id".to_string(), "5".to_string())]);
        assert_eq!(query.get("word"), None);
        assert_eq!(query.get("src_language_id"), None);
        assert_eq!(query.get("dest_language_id"), None);
    }

    #[test]
    fn test_word_lookup_with_languages() {
        let query = definitions_query(0, Some("00databaseinfo"), 1, 2);
        assert_eq!(
            query.encode(),
            "/definitions?word=00databaseinfo&src_language_id=1&dest_language_id=2"
        );
    }

    #[test]
    fn test_blank_word_is_omitted() {
        assert_eq!(definitions_query(0, Some("  "), 3, 0).encode(), "/definitions?src_language_id=3");
        assert_eq!(definitions_query(0, None, 0, 0).encode(), "/definitions");
    }

    #[test]
    fn test_invalid_language_is_dropped() {
        let query = suggestions_query("hello", Some("abc"));
        assert_eq!(query.params(), &[("query".to_string(), "hello".to_string())]);
    }

    #[test]
    fn test_valid_language_is_sent() {
        assert_eq!(
            suggestions_query("hello world", Some("1-2")).encode(),
            "/suggestions?query=hello%20world&language=1-2"
        );
        assert_eq!(suggestions_query("hej", None).encode(), "/suggestions?query=hej");
    }
}
