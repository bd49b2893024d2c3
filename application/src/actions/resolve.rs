//! Resolver primitives: name → entity lookups.
//!
//! Each resolver issues one filtered query and expects exactly one match.
//! Zero matches is a not-found error naming the resource; several matches
//! means the backend's uniqueness guarantees broke and is a hard error.
//! Warnings land in the caller's accumulator in call order, on the error
//! path too.

use crate::actions::error::ActionError;
use crate::ports::platform::{Filter, PlatformClient};
use stratus_domain::{Domain, Organization, Space, Warnings};
use tracing::debug;

/// Looks up an organization by name.
pub async fn organization_by_name(
    client: &dyn PlatformClient,
    name: &str,
    warnings: &mut Warnings,
) -> Result<Organization, ActionError> {
    debug!("resolving organization '{}'", name);
    let (call_warnings, result) = client.get_organizations(&[Filter::names([name])]).await;
    warnings.append(call_warnings);

    let mut matches = result?.into_iter();
    match (matches.next(), matches.next()) {
        (Some(org), None) => Ok(org),
        (None, _) => Err(ActionError::OrganizationNotFound { name: name.to_string() }),
        (Some(_), Some(_)) => Err(ActionError::AmbiguousResource {
            kind: "organization",
            name: name.to_string(),
        }),
    }
}

/// Looks up a space by name within an organization.
pub async fn space_by_name(
    client: &dyn PlatformClient,
    name: &str,
    organization_guid: &str,
    warnings: &mut Warnings,
) -> Result<Space, ActionError> {
    debug!("resolving space '{}' in organization {}", name, organization_guid);
    let (call_warnings, result) = client
        .get_spaces(&[
            Filter::names([name]),
            Filter::organization_guids([organization_guid]),
        ])
        .await;
    warnings.append(call_warnings);

    let mut matches = result?.into_iter();
    match (matches.next(), matches.next()) {
        (Some(space), None) => Ok(space),
        (None, _) => Err(ActionError::SpaceNotFound { name: name.to_string() }),
        (Some(_), Some(_)) => Err(ActionError::AmbiguousResource {
            kind: "space",
            name: name.to_string(),
        }),
    }
}

/// Looks up a domain by name.
pub async fn domain_by_name(
    client: &dyn PlatformClient,
    name: &str,
    warnings: &mut Warnings,
) -> Result<Domain, ActionError> {
    debug!("resolving domain '{}'", name);
    let (call_warnings, result) = client.get_domains(&[Filter::names([name])]).await;
    warnings.append(call_warnings);

    let mut matches = result?.into_iter();
    match (matches.next(), matches.next()) {
        (Some(domain), None) => Ok(domain),
        (None, _) => Err(ActionError::DomainNotFound { name: name.to_string() }),
        (Some(_), Some(_)) => Err(ActionError::AmbiguousResource {
            kind: "domain",
            name: name.to_string(),
        }),
    }
}
