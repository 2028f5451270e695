use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum OwnershipError {
    /// The source export could not be read or decoded as UTF-8.
    #[error("failed to read source {path}: {source}")]
    SourceRead {
        /// The path that was being read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The delimiter-separated payload could not be parsed at all.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The source layout was unexpected or a required column is missing.
    #[error("Source format unexpected or missing column: {0}")]
    Data(String),

    /// An error occurred during an HTTP request to the store.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The store returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A JSON payload could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
