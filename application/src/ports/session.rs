//! Session store port
//!
//! Defines the interface for the persisted session/config state the
//! authenticator mutates. Implementations use interior mutability; methods
//! take `&self` so the store can be shared behind an `Arc`.
//!
//! The grant-type check in the authenticator is read-then-decide-then-write
//! and is not atomic; callers must serialize authentication attempts
//! against one store.

use stratus_domain::StoredGrant;

/// Persisted session state.
///
/// Token state is overwritten wholesale on every authentication attempt,
/// never partially updated.
pub trait SessionStore: Send + Sync {
    /// Replaces the stored access token, refresh token, and SSH-OAuth
    /// client identifier.
    fn set_token_information(&self, access_token: &str, refresh_token: &str, ssh_oauth_client: &str);

    /// Clears any previously targeted organization and space.
    fn unset_organization_and_space_information(&self);

    /// Records the grant used by the last successful authentication.
    fn set_grant_type(&self, grant: StoredGrant);

    /// The grant recorded by the last successful authentication.
    fn grant_type(&self) -> StoredGrant;

    /// Stores the client id for a client-credentials session. The secret
    /// is accepted for interface symmetry but is never persisted with a
    /// real value by this layer.
    fn set_client_credentials(&self, client_id: &str, client_secret: &str);

    /// Drops any stored client credentials.
    fn clear_client_credentials(&self);
}
