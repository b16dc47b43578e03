use crate::core::error::FetchError;
use std::time::Duration;

const USER_AGENT: &str = concat!("dtmoney/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by every request of a provider.
///
/// # Parameters
/// - `timeout_secs`: Whole-request timeout; `0` disables it
pub fn build_client(timeout_secs: u64) -> Result<reqwest::Client, FetchError> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }
    builder
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))
}

/// Joins a base url and a path without doubling or dropping the slash.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
