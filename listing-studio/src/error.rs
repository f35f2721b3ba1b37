//! Error definitions for the client.

use thiserror::Error;

use listing_studio_types::studio::ParseCategoryError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("No image generated")]
    NoImageProduced,

    #[error("Failed to generate text")]
    NoTextProduced,
}

impl From<ParseCategoryError> for Error {
    fn from(err: ParseCategoryError) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
