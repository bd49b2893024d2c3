//! Platform resource entities.
//!
//! Identity for every resource is its backend-assigned GUID; names are the
//! human-facing handles that get resolved to GUIDs before any mutating call.

use serde::{Deserialize, Serialize};

/// Top-level tenancy unit. Owns spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub guid: String,
    pub name: String,
}

/// A deployment area within an organization. Owns routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub guid: String,
    pub name: String,
}

/// A DNS domain that routes are mapped onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub guid: String,
    pub name: String,
}

/// An HTTP route: host + domain + path, owned by a space.
///
/// `space_name` and `domain_name` are denormalized for display and filled
/// in by the application layer, not the backend. When a referenced space or
/// domain was deleted concurrently they degrade to `""` instead of failing
/// the whole listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub guid: String,
    pub space_guid: String,
    pub domain_guid: String,
    pub host: String,
    pub path: String,
    pub space_name: String,
    pub domain_name: String,
}

impl Route {
    /// The externally visible address of this route, e.g.
    /// `www.example.com/docs`.
    pub fn address(&self) -> String {
        if self.host.is_empty() {
            format!("{}{}", self.domain_name, self.path)
        } else {
            format!("{}.{}{}", self.host, self.domain_name, self.path)
        }
    }
}
