use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("base url {url} cannot carry a path")]
    InvalidBaseUrl { url: String },

    #[error("failed to build http client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to {action}: {source}")]
    Transport {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to {action}: status code {status}, response: {body}")]
    Status {
        action: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("failed to {action}: {message}")]
    Rejected {
        action: &'static str,
        message: String,
    },

    #[error("failed to parse {action} response: {source}")]
    Decode {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
