use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("API key is not configured. Set GOOGLE_API_KEY or put api_key in haru.toml.")]
    MissingApiKey,

    #[error("Extraction request failed")]
    Http(#[from] reqwest::Error),

    #[error("Extraction returned an unusable reply: {0}")]
    Extraction(String),

    #[error("Malformed extraction payload")]
    Payload(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
