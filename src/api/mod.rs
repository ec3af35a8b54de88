pub mod companies;
pub mod contact_logs;
pub mod contacts;
pub mod envelope;
pub mod models;
pub mod templates;

use once_cell::sync::Lazy;
use reqwest::Client as HttpClient;
use thiserror::Error;

/// One shared connection pool for every resource module.
pub static HTTP: Lazy<HttpClient> = Lazy::new(HttpClient::new);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.status() == Some(400)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_server(&self) -> bool {
        matches!(self.status(), Some(code) if code >= 500)
    }
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

pub(crate) fn expect_success(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status().as_u16()))
    }
}
