//! Identity provider client port
//!
//! Defines the interface for the token exchange against the identity
//! provider. The adapter owns the OAuth wire format; this layer only
//! decides what session state to persist afterwards.

use async_trait::async_trait;
use stratus_domain::{Credentials, GrantType};
use thiserror::Error;

/// Errors surfaced by the identity provider client.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// The provider rejected the credentials.
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from the identity provider: {0}")]
    InvalidResponse(String),
}

/// The tokens minted by a successful exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Typed client for the identity provider.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Performs the token exchange.
    ///
    /// The credential bag is forwarded verbatim; extra fields such as a
    /// one-time MFA code are the provider's business. `origin` selects the
    /// identity zone for password-style grants and is ignored otherwise.
    async fn authenticate(
        &self,
        credentials: &Credentials,
        origin: &str,
        grant_type: GrantType,
    ) -> Result<TokenPair, IdentityError>;
}
