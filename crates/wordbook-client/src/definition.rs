use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::decode::nullable;

/// One definition of a word in one dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionEntry {
    #[serde(rename = "definition", default, deserialize_with = "nullable")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub dest_language_id: u32,
    #[serde(rename = "dictionary", default, deserialize_with = "nullable")]
    pub dictionary_label: String,
    #[serde(rename = "src_language_id", default, deserialize_with = "nullable")]
    pub source_language_id: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub word_id: u64,
}

/// Definitions grouped by dictionary id (`"<src>-<dest>"`).
///
/// An empty bundle means the lookup found nothing; it is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefinitionBundle {
    entries: BTreeMap<String, Vec<DefinitionEntry>>,
}

impl DefinitionBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dictionary_id: &str) -> Option<&[DefinitionEntry]> {
        self.entries.get(dictionary_id).map(Vec::as_slice)
    }

    /// Text of the first definition listed under `dictionary_id`
    pub fn first_text(&self, dictionary_id: &str) -> Option<&str> {
        self.get(dictionary_id)
            .and_then(|defs| defs.first())
            .map(|def| def.text.as_str())
    }

    pub fn dictionary_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DefinitionEntry])> {
        self.entries
            .iter()
            .map(|(id, defs)| (id.as_str(), defs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// A `null` list decodes as an empty one, like every other nullable field
impl<'de> Deserialize<'de> for DefinitionBundle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<Vec<DefinitionEntry>>>::deserialize(deserializer)?;
        Ok(Self {
            entries: raw
                .into_iter()
                .map(|(id, defs)| (id, defs.unwrap_or_default()))
                .collect(),
        })
    }
}

impl From<BTreeMap<String, Vec<DefinitionEntry>>> for DefinitionBundle {
    fn from(entries: BTreeMap<String, Vec<DefinitionEntry>>) -> Self {
        Self { entries }
    }
}
