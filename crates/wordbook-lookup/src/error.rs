#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}
