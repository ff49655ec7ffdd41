use thiserror::Error;

/// failures while loading or decoding cms content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no `{0}` document in cms response")]
    MissingDocument(String),

    #[error("content request failed: {0}")]
    Http(String),
}
