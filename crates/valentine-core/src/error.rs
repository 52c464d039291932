//! Error types for the valentine card

use thiserror::Error;

/// Internal error type for the poem provider path.
///
/// Nothing here ever reaches the UI: every public surface maps these to a
/// fixed fallback string at the call site.
#[derive(Error, Debug)]
pub enum CardError {
    /// No poem provider credential is configured
    #[error("poem credential not configured")]
    MissingCredential,

    /// HTTP transport failure while talking to the poem provider
    #[error("poem request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Poem provider answered with a non-success status
    #[error("poem provider returned status {0}")]
    ProviderStatus(u16),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::ProviderStatus(503);
        assert_eq!(format!("{}", err), "poem provider returned status 503");
    }

    #[test]
    fn test_missing_credential_display() {
        let err = CardError::MissingCredential;
        assert_eq!(format!("{}", err), "poem credential not configured");
    }
}
