use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::decode::nullable;
use crate::error::Result;
use crate::session::ClientSession;

/// Reserved lookup word that returns a dictionary's info text
pub const INFO_SENTINEL: &str = "00databaseinfo";
/// Reserved lookup word that returns a dictionary's alphabet
pub const ALPHABET_SENTINEL: &str = "00databasealphabet";

/// Directional dictionary identifier, written `"<src>-<dest>"`.
///
/// Segments with leading zeros are accepted when parsing (`"01-2"`), but
/// `Display` always writes the canonical form (`"1-2"`), so only canonical
/// strings survive a parse/print round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DictionaryId {
    pub source_language_id: u32,
    pub dest_language_id: u32,
}

impl DictionaryId {
    pub fn new(source_language_id: u32, dest_language_id: u32) -> Self {
        Self {
            source_language_id,
            dest_language_id,
        }
    }
}

impl fmt::Display for DictionaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source_language_id, self.dest_language_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid dictionary id: {0:?}")]
pub struct InvalidDictionaryId(pub String);

impl FromStr for DictionaryId {
    type Err = InvalidDictionaryId;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || InvalidDictionaryId(s.to_string());

        let mut parts = s.split('-');
        let (Some(src), Some(dest), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        Ok(Self {
            source_language_id: parse_segment(src).ok_or_else(invalid)?,
            dest_language_id: parse_segment(dest).ok_or_else(invalid)?,
        })
    }
}

// `u32::from_str` accepts a leading '+', so check the digits first
fn parse_segment(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Whether `s` is a `"<src>-<dest>"` dictionary id.
///
/// Callers use this to drop bad ids silently instead of failing.
pub fn is_valid_dictionary_id(s: &str) -> bool {
    s.parse::<DictionaryId>().is_ok()
}

/// Dictionary metadata as listed by `/dictionaries`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryMeta {
    pub id: String,
    #[serde(rename = "short", default, deserialize_with = "nullable")]
    pub short_name: String,
    #[serde(rename = "long", default, deserialize_with = "nullable")]
    pub long_name: String,
    #[serde(rename = "alphabet", default, deserialize_with = "nullable")]
    pub alphabet_url: String,
    #[serde(rename = "info", default, deserialize_with = "nullable")]
    pub info_url: String,
    #[serde(rename = "url", default, deserialize_with = "nullable")]
    pub source_url: String,
}

/// A dictionary bound to the session it was listed from.
///
/// `info` and `alphabet` are fetched on first access and kept for the life
/// of the record. Concurrent first accesses share a single request.
#[derive(Debug)]
pub struct DictionaryRecord {
    meta: DictionaryMeta,
    session: ClientSession,
    info: OnceCell<Option<String>>,
    alphabet: OnceCell<Option<String>>,
}

impl DictionaryRecord {
    pub fn new(meta: DictionaryMeta, session: ClientSession) -> Self {
        Self {
            meta,
            session,
            info: OnceCell::new(),
            alphabet: OnceCell::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }

    /// Parsed id, `None` when the server sent something malformed
    pub fn dictionary_id(&self) -> Option<DictionaryId> {
        self.meta.id.parse().ok()
    }

    pub fn source_language_id(&self) -> Option<u32> {
        self.dictionary_id().map(|id| id.source_language_id)
    }

    pub fn dest_language_id(&self) -> Option<u32> {
        self.dictionary_id().map(|id| id.dest_language_id)
    }

    pub fn short_name(&self) -> &str {
        &self.meta.short_name
    }

    pub fn long_name(&self) -> &str {
        &self.meta.long_name
    }

    pub fn alphabet_url(&self) -> &str {
        &self.meta.alphabet_url
    }

    pub fn info_url(&self) -> &str {
        &self.meta.info_url
    }

    pub fn source_url(&self) -> &str {
        &self.meta.source_url
    }

    pub fn meta(&self) -> &DictionaryMeta {
        &self.meta
    }

    /// Info text of this dictionary, `None` if the server has none
    pub async fn info(&self) -> Result<Option<&str>> {
        self.resolve(&self.info, INFO_SENTINEL).await
    }

    /// Alphabet of this dictionary, `None` if the server has none
    pub async fn alphabet(&self) -> Result<Option<&str>> {
        self.resolve(&self.alphabet, ALPHABET_SENTINEL).await
    }

    async fn resolve<'a>(
        &'a self,
        cell: &'a OnceCell<Option<String>>,
        sentinel: &'static str,
    ) -> Result<Option<&'a str>> {
        // A failed fetch leaves the cell empty so the next call can retry
        let value = cell
            .get_or_try_init(|| self.fetch_sentinel(sentinel))
            .await?;
        Ok(value.as_deref())
    }

    async fn fetch_sentinel(&self, sentinel: &'static str) -> Result<Option<String>> {
        let Some(id) = self.dictionary_id() else {
            tracing::debug!("Skipping {sentinel} lookup for invalid dictionary id {:?}", self.meta.id);
            return Ok(None);
        };

        tracing::trace!("Fetching {sentinel} for dictionary {id}");
        let bundle = self
            .session
            .definitions(0, Some(sentinel), id.source_language_id, id.dest_language_id)
            .await?;

        Ok(bundle.first_text(self.id()).map(str::to_owned))
    }
}

/// Dictionaries from one `/dictionaries` call, in server order
#[derive(Debug, Default)]
pub struct DictionaryCatalog {
    records: Vec<DictionaryRecord>,
}

impl DictionaryCatalog {
    /// Build a catalog, keeping the first record for any repeated id
    pub fn new(records: Vec<DictionaryRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id().to_string());
                if !fresh {
                    tracing::debug!("Dropping duplicate dictionary {}", record.id());
                }
                fresh
            })
            .collect();

        Self { records }
    }

    /// Exact, case-sensitive match on the dictionary id string
    pub fn find_by_id(&self, id: &str) -> Option<&DictionaryRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DictionaryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a DictionaryCatalog {
    type Item = &'a DictionaryRecord;
    type IntoIter = std::slice::Iter<'a, DictionaryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for DictionaryCatalog {
    type Item = DictionaryRecord;
    type IntoIter = std::vec::IntoIter<DictionaryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
