//! Authentication actions.

use crate::actions::error::ActionError;
use crate::ports::identity::IdentityClient;
use crate::ports::session::SessionStore;
use std::sync::Arc;
use stratus_domain::{Credentials, GrantType, StoredGrant};
use tracing::{debug, info};

/// Orchestrates the login exchange and decides what session state to
/// persist based on the grant type used.
///
/// Authentication attempts against the same session store must be
/// serialized by the caller: the grant-type gate below reads prior state
/// that this same component writes.
pub struct Authenticator {
    identity: Arc<dyn IdentityClient>,
    session: Arc<dyn SessionStore>,
}

impl Authenticator {
    pub fn new(identity: Arc<dyn IdentityClient>, session: Arc<dyn SessionStore>) -> Self {
        Self { identity, session }
    }

    /// Exchanges `credentials` for tokens and persists the session.
    ///
    /// A password login over a live client-credentials session is refused
    /// with [`ActionError::PasswordGrantTypeLogoutRequired`] before any
    /// network or store call. Otherwise the exchange runs, and the session
    /// is overwritten wholesale: tokens on success (access token tagged
    /// with the `bearer` scheme), empty tokens on failure. The previously
    /// targeted organization and space are unset either way. Grant type
    /// (and, for client grants, the client id) is persisted only on
    /// success.
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
        origin: &str,
        grant_type: GrantType,
    ) -> Result<(), ActionError> {
        if grant_type == GrantType::Password
            && self.session.grant_type().requires_logout_before_password()
        {
            return Err(ActionError::PasswordGrantTypeLogoutRequired);
        }

        info!("authenticating with grant type '{}'", grant_type);
        let exchange = self.identity.authenticate(credentials, origin, grant_type).await;
        self.session.unset_organization_and_space_information();

        let tokens = match exchange {
            Ok(tokens) => tokens,
            Err(err) => {
                // A failed attempt clears the session; grant state is
                // only ever written on success.
                self.session.set_token_information("", "", "");
                return Err(err.into());
            }
        };

        let access_token = format!("bearer {}", tokens.access_token);
        self.session
            .set_token_information(&access_token, &tokens.refresh_token, "");

        if grant_type != GrantType::Password {
            let client_id = credentials.get("client_id").unwrap_or_default();
            self.session.set_client_credentials(client_id, "");
        }
        self.session.set_grant_type(grant_type.into());

        Ok(())
    }

    /// Tears the session down: tokens, grant state, stored client
    /// credentials, and the targeted organization/space. No identity
    /// provider call is involved.
    pub fn logout(&self) {
        debug!("clearing session state");
        self.session.set_token_information("", "", "");
        self.session.set_grant_type(StoredGrant::None);
        self.session.clear_client_credentials();
        self.session.unset_organization_and_space_information();
    }
}
