//! Client for the wordbook dictionary API.
//!
//! [`ClientSession`] issues the three top-level requests. The records it
//! hands back ([`DictionaryRecord`], [`Suggestion`]) hold on to the session
//! and fetch definitions, info and alphabet text on demand.

pub mod decode;
pub mod definition;
pub mod dictionary;
pub mod error;
pub mod query;
pub mod session;
pub mod suggestion;
pub mod transport;

pub use definition::{DefinitionBundle, DefinitionEntry};
pub use dictionary::{
    DictionaryCatalog, DictionaryId, DictionaryMeta, DictionaryRecord, InvalidDictionaryId,
    is_valid_dictionary_id,
};
pub use error::{ClientError, Result, TransportError};
pub use query::Query;
pub use session::ClientSession;
pub use suggestion::{Suggestion, SuggestionEntry};
pub use transport::{HttpTransport, Transport};
