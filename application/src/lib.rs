//! Application layer for stratus
//!
//! This crate contains the actions (orchestrated platform operations) and
//! the port definitions they are built on. It depends only on the domain
//! layer.
//!
//! Each action is a short, strictly sequential pipeline over the ports:
//! resolve names to GUIDs, issue the backend call, translate backend
//! failures into action errors, and assemble the enriched result. A
//! [`stratus_domain::Warnings`] accumulator is threaded through every
//! sub-call so advisories survive even the error path.

pub mod actions;
pub mod ports;

// Re-export commonly used types
pub use actions::auth::Authenticator;
pub use actions::error::ActionError;
pub use actions::job::poll_job;
pub use actions::resolve::{domain_by_name, organization_by_name, space_by_name};
pub use actions::route::RouteActions;
pub use actions::ActionResult;
pub use ports::identity::{IdentityClient, IdentityError, TokenPair};
pub use ports::platform::{
    ApiError, ClientResult, Filter, FilterKey, PlatformClient, RouteResource, RouteSpec,
};
pub use ports::session::SessionStore;

#[cfg(test)]
pub(crate) mod test_doubles;
