/// Failure to get a body back from the wordbook API
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to decode {target} response: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
