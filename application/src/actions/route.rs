//! Route actions: create, list, delete.

use crate::actions::error::ActionError;
use crate::actions::{job, resolve, ActionResult};
use crate::ports::platform::{ApiError, Filter, PlatformClient, RouteResource, RouteSpec};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use stratus_domain::{normalize_path, Domain, Job, Route, Space, Warnings};
use tracing::{info, warn};

/// Orchestrates route operations against the platform client.
///
/// Every method is a sequential pipeline: resolve the names involved, issue
/// the backend call, translate failures, and assemble the enriched result.
pub struct RouteActions {
    client: Arc<dyn PlatformClient>,
}

impl RouteActions {
    pub fn new(client: Arc<dyn PlatformClient>) -> Self {
        Self { client }
    }

    /// Creates a route for `host`.`domain``path` in the given org/space.
    ///
    /// Resolves the domain, organization, and space names in that order;
    /// the first failure short-circuits with every warning collected so
    /// far. A backend uniqueness rejection becomes
    /// [`ActionError::RouteAlreadyExists`]; the returned route carries the
    /// caller-supplied names for display rather than re-fetched ones.
    pub async fn create_route(
        &self,
        organization_name: &str,
        space_name: &str,
        domain_name: &str,
        host: &str,
        path: &str,
    ) -> ActionResult<Route> {
        let mut warnings = Warnings::new();
        let result = self
            .create_route_impl(
                organization_name,
                space_name,
                domain_name,
                host,
                path,
                &mut warnings,
            )
            .await;
        (warnings, result)
    }

    async fn create_route_impl(
        &self,
        organization_name: &str,
        space_name: &str,
        domain_name: &str,
        host: &str,
        path: &str,
        warnings: &mut Warnings,
    ) -> Result<Route, ActionError> {
        let client = self.client.as_ref();

        let domain = resolve::domain_by_name(client, domain_name, warnings).await?;
        let organization = resolve::organization_by_name(client, organization_name, warnings).await?;
        let space =
            resolve::space_by_name(client, space_name, &organization.guid, warnings).await?;

        let path = normalize_path(path);
        info!("creating route {}.{}{}", host, domain_name, path);

        let (call_warnings, result) = self
            .client
            .create_route(RouteSpec {
                space_guid: space.guid,
                domain_guid: domain.guid,
                host: host.to_string(),
                path,
            })
            .await;
        warnings.append(call_warnings);

        let resource = match result {
            Ok(resource) => resource,
            Err(cause @ ApiError::RouteNotUnique(_)) => {
                return Err(ActionError::RouteAlreadyExists { source: cause });
            }
            Err(other) => return Err(other.into()),
        };

        Ok(Route {
            guid: resource.guid,
            space_guid: resource.space_guid,
            domain_guid: resource.domain_guid,
            host: resource.host,
            path: resource.path,
            space_name: space_name.to_string(),
            domain_name: domain_name.to_string(),
        })
    }

    /// Lists every route owned by a space, enriched with display names.
    pub async fn routes_by_space(&self, space_guid: &str) -> ActionResult<Vec<Route>> {
        let mut warnings = Warnings::new();
        let result = self.routes_by_space_impl(space_guid, &mut warnings).await;
        (warnings, result)
    }

    async fn routes_by_space_impl(
        &self,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<Vec<Route>, ActionError> {
        let (call_warnings, result) = self
            .client
            .get_routes(&[Filter::space_guids([space_guid])])
            .await;
        warnings.append(call_warnings);
        let routes = result?;

        let (call_warnings, result) = self.client.get_spaces(&[Filter::guids([space_guid])]).await;
        warnings.append(call_warnings);
        let spaces = result?;

        let domain_guids = distinct_guids(routes.iter().map(|route| route.domain_guid.as_str()));
        let (call_warnings, result) = self.client.get_domains(&[Filter::guids(domain_guids)]).await;
        warnings.append(call_warnings);
        let domains = result?;

        Ok(enrich_routes(routes, &spaces, &domains))
    }

    /// Lists every route in an organization, enriched with display names.
    ///
    /// The referenced space and domain GUID sets are each fetched in a
    /// single batched lookup over the deduplicated values.
    pub async fn routes_by_organization(&self, organization_guid: &str) -> ActionResult<Vec<Route>> {
        let mut warnings = Warnings::new();
        let result = self
            .routes_by_organization_impl(organization_guid, &mut warnings)
            .await;
        (warnings, result)
    }

    async fn routes_by_organization_impl(
        &self,
        organization_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<Vec<Route>, ActionError> {
        let (call_warnings, result) = self
            .client
            .get_routes(&[Filter::organization_guids([organization_guid])])
            .await;
        warnings.append(call_warnings);
        let routes = result?;

        let space_guids = distinct_guids(routes.iter().map(|route| route.space_guid.as_str()));
        let domain_guids = distinct_guids(routes.iter().map(|route| route.domain_guid.as_str()));

        // Spaces before domains, so warning order stays deterministic.
        let (call_warnings, result) = self.client.get_spaces(&[Filter::guids(space_guids)]).await;
        warnings.append(call_warnings);
        let spaces = result?;

        let (call_warnings, result) = self.client.get_domains(&[Filter::guids(domain_guids)]).await;
        warnings.append(call_warnings);
        let domains = result?;

        Ok(enrich_routes(routes, &spaces, &domains))
    }

    /// Deletes the route identified by domain + host + path and waits for
    /// the backend's asynchronous delete job to finish.
    pub async fn delete_route(
        &self,
        domain_name: &str,
        host: &str,
        path: &str,
    ) -> ActionResult<()> {
        let mut warnings = Warnings::new();
        let result = self
            .delete_route_impl(domain_name, host, path, &mut warnings)
            .await;
        (warnings, result)
    }

    async fn delete_route_impl(
        &self,
        domain_name: &str,
        host: &str,
        path: &str,
        warnings: &mut Warnings,
    ) -> Result<(), ActionError> {
        let domain = resolve::domain_by_name(self.client.as_ref(), domain_name, warnings).await?;
        let path = normalize_path(path);

        let (call_warnings, result) = self
            .client
            .get_routes(&[
                Filter::domain_guids([domain.guid.as_str()]),
                Filter::hosts([host]),
                Filter::paths([path.as_str()]),
            ])
            .await;
        warnings.append(call_warnings);
        let routes = result?;

        // The filter set is the route's uniqueness key, so at most one match.
        let Some(route) = routes.into_iter().next() else {
            return Err(ActionError::RouteNotFound {
                domain: domain_name.to_string(),
                host: host.to_string(),
                path,
            });
        };

        info!("deleting route {}.{}{}", host, domain_name, route.path);
        let (call_warnings, result) = self.client.delete_route(&route.guid).await;
        warnings.append(call_warnings);
        let delete_job = result?;

        let (poll_warnings, result) = job::poll_job(self.client.as_ref(), delete_job).await;
        warnings.append(poll_warnings);
        result
    }

    /// Drives a backend job to completion. See [`job::poll_job`].
    pub async fn poll_job(&self, job: Job) -> ActionResult<()> {
        job::poll_job(self.client.as_ref(), job).await
    }
}

/// Deduplicates GUIDs, preserving first-seen order for query construction.
fn distinct_guids<'a>(guids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for guid in guids {
        if seen.insert(guid) {
            distinct.push(guid.to_string());
        }
    }
    distinct
}

/// Joins batch lookup results onto the routes by GUID. A reference missing
/// from its batch degrades to an empty display name; the route itself is
/// still returned.
fn enrich_routes(routes: Vec<RouteResource>, spaces: &[Space], domains: &[Domain]) -> Vec<Route> {
    let space_names: HashMap<&str, &str> = spaces
        .iter()
        .map(|space| (space.guid.as_str(), space.name.as_str()))
        .collect();
    let domain_names: HashMap<&str, &str> = domains
        .iter()
        .map(|domain| (domain.guid.as_str(), domain.name.as_str()))
        .collect();

    routes
        .into_iter()
        .map(|resource| {
            let space_name = match space_names.get(resource.space_guid.as_str()) {
                Some(name) => name.to_string(),
                None => {
                    warn!("space {} missing from batch lookup", resource.space_guid);
                    String::new()
                }
            };
            let domain_name = match domain_names.get(resource.domain_guid.as_str()) {
                Some(name) => name.to_string(),
                None => {
                    warn!("domain {} missing from batch lookup", resource.domain_guid);
                    String::new()
                }
            };
            Route {
                guid: resource.guid,
                space_guid: resource.space_guid,
                domain_guid: resource.domain_guid,
                host: resource.host,
                path: resource.path,
                space_name,
                domain_name,
            }
        })
        .collect()
}
