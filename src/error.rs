use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during the profile request, including status and body decoding
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Error during JSON serialization or deserialization
    #[error("json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// Error while writing output
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error when a display target is absent from the surface
    #[error("display target not found: '{0}'")]
    MissingTarget(String),
    /// Error when the API returns no profiles
    #[error("no profiles in response")]
    EmptyResults,
}
