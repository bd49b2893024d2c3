//! Domain layer for stratus
//!
//! This crate contains the core entities and platform rules shared by the
//! other layers. It has no dependencies on transport, storage, or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Resources
//!
//! The platform organizes workloads into [`Organization`]s, which contain
//! [`Space`]s, which in turn own [`Route`]s mapped onto [`Domain`]s. Humans
//! refer to all of these by name; the backend only understands GUIDs, so
//! the application layer resolves names before acting.
//!
//! ## Warnings
//!
//! Every backend call may return non-fatal advisory messages. [`Warnings`]
//! is the ordered accumulator threaded through each call chain so that no
//! advisory is lost, even when an operation ultimately fails.
//!
//! ## Grants
//!
//! Sessions are established against the identity provider with a
//! [`GrantType`]. The grant most recently persisted to the session is
//! tracked as a [`StoredGrant`], which gates which login flows are allowed
//! next.

pub mod auth;
pub mod job;
pub mod resource;
pub mod warnings;

// Re-export commonly used types
pub use auth::credentials::Credentials;
pub use auth::grant::{GrantType, StoredGrant};
pub use job::Job;
pub use resource::entities::{Domain, Organization, Route, Space};
pub use resource::path::normalize_path;
pub use warnings::Warnings;
