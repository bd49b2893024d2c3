//! Authentication domain
//!
//! Value objects for the login exchange: the credential bag sent to the
//! identity provider and the grant types that gate session state.

pub mod credentials;
pub mod grant;
