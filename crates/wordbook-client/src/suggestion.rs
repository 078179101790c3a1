use crate::definition::DefinitionBundle;
use crate::error::Result;
use crate::session::ClientSession;

/// A candidate match returned by `/suggestions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub word_id: u64,
    pub word: String,
    pub source_language_name: String,
    pub source_language_id: u32,
}

impl SuggestionEntry {
    /// Look up definitions by word id.
    ///
    /// `dest_language_id` of `None` (or `Some(0)`) asks for every destination
    /// dictionary of the source language. Nothing is cached, each call goes
    /// to the server.
    pub async fn definitions(
        &self,
        session: &ClientSession,
        dest_language_id: Option<u32>,
    ) -> Result<DefinitionBundle> {
        session
            .definitions(
                self.word_id,
                None,
                self.source_language_id,
                dest_language_id.unwrap_or(0),
            )
            .await
    }
}

/// Suggestion bound to the session that produced it
#[derive(Debug, Clone)]
pub struct Suggestion {
    entry: SuggestionEntry,
    session: ClientSession,
}

impl Suggestion {
    pub fn new(entry: SuggestionEntry, session: ClientSession) -> Self {
        Self { entry, session }
    }

    pub fn entry(&self) -> &SuggestionEntry {
        &self.entry
    }

    pub fn into_entry(self) -> SuggestionEntry {
        self.entry
    }

    pub fn word_id(&self) -> u64 {
        self.entry.word_id
    }

    pub fn word(&self) -> &str {
        &self.entry.word
    }

    pub fn source_language_name(&self) -> &str {
        &self.entry.source_language_name
    }

    pub fn source_language_id(&self) -> u32 {
        self.entry.source_language_id
    }

    pub async fn definitions(&self, dest_language_id: Option<u32>) -> Result<DefinitionBundle> {
        self.entry.definitions(&self.session, dest_language_id).await
    }
}
