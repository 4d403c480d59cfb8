use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for the Omada controller client and exporter.
#[derive(Error, Debug)]
pub enum OmadaError {
    /// Login was rejected or the controller returned no usable token.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The controller answered with an unexpected API error code.
    #[error("API error code {code}: {msg}")]
    Protocol { code: i64, msg: String },

    /// Network, DNS or TLS failure, or a non-2xx HTTP response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The controller no longer considers the session logged in.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// No site with the configured name in the user's privilege list.
    #[error("Site not found: {0}")]
    SiteNotFound(String),

    /// Error parsing a URL.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] UrlParseError),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type for Omada API operations.
pub type OmadaResult<T> = Result<T, OmadaError>;
