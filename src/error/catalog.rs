use thiserror::Error;

/// Failures while talking to the remote machine catalog or decoding its responses.
///
/// None of these are retried. Every variant is fatal to the single command invocation
/// that triggered the request and is never fatal to the process.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A response lacks a key the catalog API contract guarantees.
    ///
    /// Usually means the upstream API changed shape.
    #[error("Catalog response is missing required field '{0}'")]
    MissingField(String),

    /// A release timestamp is present but does not match `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
    #[error("Malformed release timestamp '{value}': {source}")]
    MalformedTimestamp {
        /// The raw timestamp string
        value: String,
        /// The underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// Network or transport failure, including non-success HTTP status codes.
    #[error("Catalog API is unavailable: {0}")]
    RemoteUnavailable(#[from] reqwest::Error),
}
