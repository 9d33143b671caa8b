use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to the terminology or scan services
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("failed to decode response from {url}: {details}")]
    Decode { url: String, details: String },

    #[error("Invalid response from server")]
    InvalidResponse,

    #[error("Invalid file type. Please upload PDF, DOC, DOCX, or image files.")]
    UnsupportedFileType { path: PathBuf },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn decode(url: &str, details: impl ToString) -> Self {
        ApiError::Decode {
            url: url.to_string(),
            details: details.to_string(),
        }
    }
}
