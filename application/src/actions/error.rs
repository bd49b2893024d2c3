//! Action error taxonomy.
//!
//! Backend and identity-provider errors pass through the transparent
//! variants unchanged; everything else here is a translation this layer
//! owns: name lookups that found nothing, a create that collided with an
//! existing route, or a login flow the grant state machine forbids.

use crate::ports::identity::IdentityError;
use crate::ports::platform::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Organization '{name}' not found.")]
    OrganizationNotFound { name: String },

    #[error("Space '{name}' not found.")]
    SpaceNotFound { name: String },

    #[error("Domain '{name}' not found.")]
    DomainNotFound { name: String },

    #[error("Route with host '{host}', domain '{domain}' and path '{path}' not found.")]
    RouteNotFound {
        domain: String,
        host: String,
        path: String,
    },

    /// The backend's uniqueness guarantees make this unreachable in
    /// practice; if it ever fires, the query was built wrong or the
    /// backend is misbehaving.
    #[error("expected exactly one {kind} named '{name}', got several")]
    AmbiguousResource { kind: &'static str, name: String },

    #[error("Route already exists.")]
    RouteAlreadyExists {
        #[source]
        source: ApiError,
    },

    #[error("Cannot authenticate with password grant while logged in as a client. Log out first.")]
    PasswordGrantTypeLogoutRequired,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Identity(#[from] IdentityError),
}
