//! Platform API client port
//!
//! Defines the interface for talking to the platform's REST API. The
//! adapter owns everything wire-level: request signing, pagination,
//! retries for transient failures, timeouts, and cancellation. This layer
//! only sequences calls and interprets their outcomes.

use async_trait::async_trait;
use stratus_domain::{Domain, Job, Organization, Space, Warnings};
use thiserror::Error;

/// Errors surfaced by the platform client.
///
/// `Timeout` and `Cancelled` are policy signals owned by the adapter; the
/// action layer passes them through without reinterpreting them.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend rejected a create because an equivalent route exists.
    #[error("route is not unique: {0}")]
    RouteNotUnique(String),

    /// The asynchronous job reached a terminal failure state.
    #[error("job failed: {0}")]
    JobFailed(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from the platform: {0}")]
    InvalidResponse(String),

    #[error("request timed out")]
    Timeout,

    #[error("operation cancelled")]
    Cancelled,
}

/// Every client call yields its warnings alongside the result, so
/// advisories survive the error path.
pub type ClientResult<T> = (Warnings, Result<T, ApiError>);

/// A key/values filter attached to a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub key: FilterKey,
    pub values: Vec<String>,
}

/// The filterable dimensions of the platform's list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Guids,
    Names,
    OrganizationGuids,
    SpaceGuids,
    DomainGuids,
    Hosts,
    Paths,
}

impl Filter {
    pub fn new(key: FilterKey, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            key,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn guids(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(FilterKey::Guids, values)
    }

    pub fn names(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(FilterKey::Names, values)
    }

    pub fn organization_guids(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(FilterKey::OrganizationGuids, values)
    }

    pub fn space_guids(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(FilterKey::SpaceGuids, values)
    }

    pub fn domain_guids(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(FilterKey::DomainGuids, values)
    }

    pub fn hosts(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(FilterKey::Hosts, values)
    }

    pub fn paths(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(FilterKey::Paths, values)
    }
}

/// A route as the backend returns it, without denormalized names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteResource {
    pub guid: String,
    pub space_guid: String,
    pub domain_guid: String,
    pub host: String,
    pub path: String,
}

/// The payload for a route creation call. All references are GUIDs;
/// name resolution has already happened by the time this is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub space_guid: String,
    pub domain_guid: String,
    pub host: String,
    pub path: String,
}

/// Typed client for the platform's REST API.
///
/// Implementations must return warnings in the order the backend emitted
/// them; the actions concatenate them across calls in call order.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    async fn get_routes(&self, filters: &[Filter]) -> ClientResult<Vec<RouteResource>>;

    async fn get_spaces(&self, filters: &[Filter]) -> ClientResult<Vec<Space>>;

    async fn get_domains(&self, filters: &[Filter]) -> ClientResult<Vec<Domain>>;

    async fn get_organizations(&self, filters: &[Filter]) -> ClientResult<Vec<Organization>>;

    async fn create_route(&self, spec: RouteSpec) -> ClientResult<RouteResource>;

    /// Requests deletion; the backend performs it asynchronously and
    /// returns a job handle to poll.
    async fn delete_route(&self, guid: &str) -> ClientResult<Job>;

    /// Blocks until the job reaches a terminal state. Timeout and
    /// cancellation policy belong to the implementation.
    async fn poll_job(&self, job: Job) -> ClientResult<()>;
}
