//! Sign-in flow errors.

use thiserror::Error;

/// The interactive sign-in flow failed or was cancelled.
///
/// Carried back to the login screen as a query parameter by the OAuth
/// callback route; never retried automatically.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Provider credentials or endpoints are missing/malformed.
    #[error("{0}")]
    Config(String),
    /// The callback's CSRF state did not match a pending sign-in.
    #[error("invalid or expired OAuth state")]
    InvalidState,
    /// The authorization code could not be exchanged for a token.
    #[error("token exchange failed: {0}")]
    Exchange(String),
    /// Network or database failure while talking to the provider.
    #[error("{0}")]
    Transport(String),
}
