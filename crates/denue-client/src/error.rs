use thiserror::Error;

/// Errors returned by the DENUE API client.
///
/// Malformed or unexpected JSON on a successful response is not an error:
/// it degrades to an empty result or empty fields.
#[derive(Debug, Error)]
pub enum DenueError {
    /// Network, DNS, TLS or timeout failure before a usable response arrived.
    #[error("network error or failed request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A request URL could not be built from the configured base URL.
    #[error("invalid URL for {endpoint}: {reason}")]
    InvalidUrl {
        endpoint: &'static str,
        reason: String,
    },
}

// The request URL carries the API token as a path segment, so it is stripped
// before the error can be displayed or logged.
impl From<reqwest::Error> for DenueError {
    fn from(err: reqwest::Error) -> Self {
        DenueError::Transport(err.without_url())
    }
}
