use thiserror::Error;

/// Main error type for WoW API operations
#[derive(Debug, Error)]
pub enum WowError {
    /// Region identifier matched no entry of the region table
    #[error("region '{region}' is not valid")]
    InvalidRegion { region: String },

    /// Locale is not served by the resolved region
    #[error("locale '{locale}' is not valid for region '{region}'")]
    InvalidLocale { locale: String, region: String },

    /// One or more unrecognized character fields were requested
    #[error("the following fields are not valid: {}", .fields.join(", "))]
    InvalidFields { fields: Vec<String> },

    /// The GET round trip could not be completed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body is not JSON or does not match the record shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request signature could not be computed
    #[error("failed to sign request: {0}")]
    Signing(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// HTTP client could not be constructed from the configuration
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl WowError {
    /// Check if this error came from the transport layer
    pub fn is_network(&self) -> bool {
        matches!(self, WowError::Network(_))
    }

    /// Check if this error came from decoding the response body
    pub fn is_decode(&self) -> bool {
        matches!(self, WowError::Decode(_))
    }

    /// Check if this error was raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WowError::InvalidRegion { .. }
                | WowError::InvalidLocale { .. }
                | WowError::InvalidFields { .. }
        )
    }
}

/// Result type for WoW API operations
pub type Result<T> = std::result::Result<T, WowError>;
