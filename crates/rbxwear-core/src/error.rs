//! Error types module
//!
//! All failures surfaced by the client are unified under the [`Error`] enum.
//! Nothing is retried internally: every variant propagates straight to the
//! caller, and `RateLimited` stays distinct from `Transport` so callers can
//! back off instead of aborting.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The anti-forgery token endpoint did not return the expected header.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The remote service answered with a non-success HTTP status.
    #[error("Request failed with status {status}: {body}")]
    Transport { status: u16, body: String },

    /// HTTP 429 on a mutating call.
    #[error("Rate limit hit during {operation}")]
    RateLimited { operation: &'static str },

    /// A response was missing an expected field, tag, or marker.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// An asset-type code outside the clothing subtypes was used where a
    /// clothing asset is required.
    #[error("Asset type {asset_type_id} is not a clothing type")]
    InvalidAssetType { asset_type_id: u32 },

    /// Connection-level failure from the HTTP transport.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(format!("JSON parsing error: {}", err))
    }
}

impl Error {
    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => Some(*status),
            Error::RateLimited { .. } => Some(429),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether retrying the same logical request may succeed.
    ///
    /// Rate limits and server-side or connection failures are transient;
    /// authentication and parse failures are not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::RateLimited { .. } => true,
            Error::Transport { status, .. } => *status >= 500,
            Error::Http(_) => true,
            Error::Authentication(_) | Error::Parse(_) | Error::InvalidAssetType { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_is_recoverable() {
        let err = Error::RateLimited { operation: "upload" };
        assert_eq!(err.status(), Some(429));
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("upload"));
    }

    #[test]
    fn transport_preserves_status() {
        let err = Error::Transport {
            status: 403,
            body: "Token Validation Failed".to_string(),
        };
        assert_eq!(err.status(), Some(403));
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("403"));

        let err = Error::Transport {
            status: 502,
            body: String::new(),
        };
        assert!(err.is_recoverable());
    }

    #[test]
    fn parse_errors_are_not_recoverable() {
        let err = Error::Parse("<url> tag did not contain any text".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn serde_error_becomes_parse() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::from(serde_err);
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn invalid_asset_type_names_the_code() {
        let err = Error::InvalidAssetType { asset_type_id: 8 };
        assert!(err.to_string().contains('8'));
        assert!(!err.is_recoverable());
    }
}
