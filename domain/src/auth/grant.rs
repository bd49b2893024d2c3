//! Grant types and persisted grant state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The authentication method requested from the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Interactive user login with username/password (and possibly MFA).
    Password,
    /// Non-interactive service login with a client id and secret.
    ClientCredentials,
}

impl GrantType {
    /// The wire name of the grant, as the identity provider spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::Password => "password",
            GrantType::ClientCredentials => "client_credentials",
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The grant recorded in the session after the last authentication.
///
/// This is the three-state machine that gates login flows: a session
/// established with client credentials must be logged out before a
/// password login may proceed, while the reverse switch is always allowed.
/// `None` is the default for a session that has never authenticated and
/// behaves like a password session for gating purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoredGrant {
    /// No authentication recorded yet.
    #[default]
    None,
    /// Last login used the password grant.
    Password,
    /// Last login used the client-credentials grant.
    ClientCredentials,
}

impl StoredGrant {
    /// Whether a password login must be preceded by an explicit logout.
    pub fn requires_logout_before_password(&self) -> bool {
        matches!(self, StoredGrant::ClientCredentials)
    }
}

impl From<GrantType> for StoredGrant {
    fn from(grant: GrantType) -> Self {
        match grant {
            GrantType::Password => StoredGrant::Password,
            GrantType::ClientCredentials => StoredGrant::ClientCredentials,
        }
    }
}
