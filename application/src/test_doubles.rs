//! Hand-written collaborator doubles shared by the action tests.
//!
//! Each double queues canned `(warnings, result)` responses per method and
//! records the calls it receives, so tests can assert on both the call
//! sequence and the exact arguments. A call with no queued response
//! panics: a test that under-queues is broken, not unlucky.

use crate::ports::identity::{IdentityClient, IdentityError, TokenPair};
use crate::ports::platform::{
    ApiError, ClientResult, Filter, PlatformClient, RouteResource, RouteSpec,
};
use crate::ports::session::SessionStore;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use stratus_domain::{Credentials, Domain, GrantType, Job, Organization, Space, StoredGrant, Warnings};

/// Builds a [`Warnings`] value from string literals.
pub(crate) fn warnings_of(warnings: &[&str]) -> Warnings {
    warnings.iter().copied().collect()
}

/// Every call a [`MockPlatform`] has received, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RecordedCall {
    GetRoutes(Vec<Filter>),
    GetSpaces(Vec<Filter>),
    GetDomains(Vec<Filter>),
    GetOrganizations(Vec<Filter>),
    CreateRoute(RouteSpec),
    DeleteRoute(String),
    PollJob(Job),
}

#[derive(Default)]
pub(crate) struct MockPlatform {
    routes: Mutex<VecDeque<ClientResult<Vec<RouteResource>>>>,
    spaces: Mutex<VecDeque<ClientResult<Vec<Space>>>>,
    domains: Mutex<VecDeque<ClientResult<Vec<Domain>>>>,
    organizations: Mutex<VecDeque<ClientResult<Vec<Organization>>>>,
    created_routes: Mutex<VecDeque<ClientResult<RouteResource>>>,
    deleted_routes: Mutex<VecDeque<ClientResult<Job>>>,
    polled_jobs: Mutex<VecDeque<ClientResult<()>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_routes(&self, warnings: Warnings, result: Result<Vec<RouteResource>, ApiError>) {
        self.routes.lock().unwrap().push_back((warnings, result));
    }

    pub fn queue_spaces(&self, warnings: Warnings, result: Result<Vec<Space>, ApiError>) {
        self.spaces.lock().unwrap().push_back((warnings, result));
    }

    pub fn queue_domains(&self, warnings: Warnings, result: Result<Vec<Domain>, ApiError>) {
        self.domains.lock().unwrap().push_back((warnings, result));
    }

    pub fn queue_organizations(
        &self,
        warnings: Warnings,
        result: Result<Vec<Organization>, ApiError>,
    ) {
        self.organizations
            .lock()
            .unwrap()
            .push_back((warnings, result));
    }

    pub fn queue_create_route(&self, warnings: Warnings, result: Result<RouteResource, ApiError>) {
        self.created_routes
            .lock()
            .unwrap()
            .push_back((warnings, result));
    }

    pub fn queue_delete_route(&self, warnings: Warnings, result: Result<Job, ApiError>) {
        self.deleted_routes
            .lock()
            .unwrap()
            .push_back((warnings, result));
    }

    pub fn queue_poll_job(&self, warnings: Warnings, result: Result<(), ApiError>) {
        self.polled_jobs
            .lock()
            .unwrap()
            .push_back((warnings, result));
    }

    /// The calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn next<T>(queue: &Mutex<VecDeque<ClientResult<T>>>, method: &str) -> ClientResult<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected {method} call: no response queued"))
    }
}

#[async_trait]
impl PlatformClient for MockPlatform {
    async fn get_routes(&self, filters: &[Filter]) -> ClientResult<Vec<RouteResource>> {
        self.record(RecordedCall::GetRoutes(filters.to_vec()));
        Self::next(&self.routes, "get_routes")
    }

    async fn get_spaces(&self, filters: &[Filter]) -> ClientResult<Vec<Space>> {
        self.record(RecordedCall::GetSpaces(filters.to_vec()));
        Self::next(&self.spaces, "get_spaces")
    }

    async fn get_domains(&self, filters: &[Filter]) -> ClientResult<Vec<Domain>> {
        self.record(RecordedCall::GetDomains(filters.to_vec()));
        Self::next(&self.domains, "get_domains")
    }

    async fn get_organizations(&self, filters: &[Filter]) -> ClientResult<Vec<Organization>> {
        self.record(RecordedCall::GetOrganizations(filters.to_vec()));
        Self::next(&self.organizations, "get_organizations")
    }

    async fn create_route(&self, spec: RouteSpec) -> ClientResult<RouteResource> {
        self.record(RecordedCall::CreateRoute(spec));
        Self::next(&self.created_routes, "create_route")
    }

    async fn delete_route(&self, guid: &str) -> ClientResult<Job> {
        self.record(RecordedCall::DeleteRoute(guid.to_string()));
        Self::next(&self.deleted_routes, "delete_route")
    }

    async fn poll_job(&self, job: Job) -> ClientResult<()> {
        self.record(RecordedCall::PollJob(job));
        Self::next(&self.polled_jobs, "poll_job")
    }
}

pub(crate) struct MockIdentity {
    responses: Mutex<VecDeque<Result<TokenPair, IdentityError>>>,
    exchanges: Mutex<Vec<(Credentials, String, GrantType)>>,
}

impl MockIdentity {
    pub fn succeeding(tokens: TokenPair) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from([Ok(tokens)])),
            exchanges: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: IdentityError) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from([Err(err)])),
            exchanges: Mutex::new(Vec::new()),
        }
    }

    /// The `(credentials, origin, grant_type)` of every exchange attempted.
    pub fn exchanges(&self) -> Vec<(Credentials, String, GrantType)> {
        self.exchanges.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityClient for MockIdentity {
    async fn authenticate(
        &self,
        credentials: &Credentials,
        origin: &str,
        grant_type: GrantType,
    ) -> Result<TokenPair, IdentityError> {
        self.exchanges
            .lock()
            .unwrap()
            .push((credentials.clone(), origin.to_string(), grant_type));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected authenticate call: no response queued"))
    }
}

#[derive(Default)]
pub(crate) struct MockSession {
    grant: Mutex<StoredGrant>,
    token_writes: Mutex<Vec<(String, String, String)>>,
    grant_writes: Mutex<Vec<StoredGrant>>,
    client_credential_writes: Mutex<Vec<(String, String)>>,
    unset_org_space_count: Mutex<usize>,
    clear_client_credentials_count: Mutex<usize>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose last successful authentication used `grant`.
    pub fn with_grant(grant: StoredGrant) -> Self {
        let session = Self::default();
        *session.grant.lock().unwrap() = grant;
        session
    }

    pub fn stored_grant(&self) -> StoredGrant {
        *self.grant.lock().unwrap()
    }

    pub fn token_writes(&self) -> Vec<(String, String, String)> {
        self.token_writes.lock().unwrap().clone()
    }

    pub fn grant_writes(&self) -> Vec<StoredGrant> {
        self.grant_writes.lock().unwrap().clone()
    }

    pub fn client_credential_writes(&self) -> Vec<(String, String)> {
        self.client_credential_writes.lock().unwrap().clone()
    }

    pub fn unset_org_space_count(&self) -> usize {
        *self.unset_org_space_count.lock().unwrap()
    }

    pub fn clear_client_credentials_count(&self) -> usize {
        *self.clear_client_credentials_count.lock().unwrap()
    }
}

impl SessionStore for MockSession {
    fn set_token_information(&self, access_token: &str, refresh_token: &str, ssh_oauth_client: &str) {
        self.token_writes.lock().unwrap().push((
            access_token.to_string(),
            refresh_token.to_string(),
            ssh_oauth_client.to_string(),
        ));
    }

    fn unset_organization_and_space_information(&self) {
        *self.unset_org_space_count.lock().unwrap() += 1;
    }

    fn set_grant_type(&self, grant: StoredGrant) {
        self.grant_writes.lock().unwrap().push(grant);
        *self.grant.lock().unwrap() = grant;
    }

    fn grant_type(&self) -> StoredGrant {
        *self.grant.lock().unwrap()
    }

    fn set_client_credentials(&self, client_id: &str, client_secret: &str) {
        self.client_credential_writes
            .lock()
            .unwrap()
            .push((client_id.to_string(), client_secret.to_string()));
    }

    fn clear_client_credentials(&self) {
        *self.clear_client_credentials_count.lock().unwrap() += 1;
    }
}
