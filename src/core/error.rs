//! Error types for fetching and searching transactions

use std::collections::BTreeMap;
use std::fmt::Display;
use thiserror::Error;

/// Failure of a single load or search against the data source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed
    #[error("request failed: {0}")]
    Transport(String),
    /// The data source did not answer in time
    #[error("request timed out")]
    Timeout,
    /// The data source answered with a non-success status
    #[error("data source returned status {status}")]
    Status { status: u16 },
    /// The body is not a JSON array of transactions
    #[error("malformed response: {0}")]
    Malformed(String),
    /// A record violates the amount sign rule
    #[error("invalid transaction: {0}")]
    Invalid(String),
    /// A newer request was issued before this one resolved
    #[error("response discarded, a newer request is pending")]
    Superseded,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
            }
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// Field-level validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Failure of a search form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invalid search form: {0}")]
    Validation(FieldErrors),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("a search is already in progress")]
    InFlight,
}
