//! Session/Profile gate
//!
//! Establishes whether a viewer is authenticated before the conversation
//! UI is reachable. The gate resolves once on startup and afterwards only
//! changes through an explicit login redirect or logout.

use crate::api::ApiClient;
use crate::error::Result;
use crate::types::Profile;

/// Authentication state of the current page session.
///
/// `Unknown` is the initial state while the startup check is in flight.
/// It renders the same as `Unauthenticated`; the distinction only matters
/// for logging and for knowing whether `check_session` has run yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Startup check not finished yet
    #[default]
    Unknown,
    /// Viewer has an active session
    Authenticated(Profile),
    /// No active session
    Unauthenticated,
}

impl AuthState {
    fn name(&self) -> &'static str {
        match self {
            AuthState::Unknown => "unknown",
            AuthState::Authenticated(_) => "authenticated",
            AuthState::Unauthenticated => "unauthenticated",
        }
    }
}

/// Gates access to the conversation UI on authentication.
#[derive(Debug, Default)]
pub struct SessionGate {
    state: AuthState,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current authentication state
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// The authenticated viewer's profile, if any
    pub fn profile(&self) -> Option<&Profile> {
        match &self.state {
            AuthState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile().is_some()
    }

    /// Resolve the gate by asking the identity collaborator for the
    /// current profile.
    ///
    /// Any failure (no active session, network error) resolves to
    /// `Unauthenticated`: absence of a profile IS the logged-out UI state,
    /// so the failure is logged and never surfaced as an error. Calling
    /// this again without a server-side change yields the same state.
    pub async fn check_session(&mut self, client: &ApiClient) {
        let next = match client.profile().await {
            Ok(profile) => {
                tracing::info!(email = %profile.email, "Session check: active session");
                AuthState::Authenticated(profile)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Session check: no active session");
                AuthState::Unauthenticated
            }
        };
        self.transition(next);
    }

    /// Fetch the authentication URL the front end must navigate to.
    ///
    /// No local state change: the navigation leaves the page, and the
    /// identity collaborator redirects back with a session cookie.
    pub async fn login(&self, client: &ApiClient) -> Result<String> {
        client.login().await
    }

    /// Log out and clear the profile.
    ///
    /// The remote call is fire-and-forget: the UI must not stay visually
    /// logged in after the viewer asked to leave, so local state is
    /// cleared whether or not the request succeeded.
    pub async fn logout(&mut self, client: &ApiClient) {
        if let Err(e) = client.logout().await {
            tracing::warn!(error = %e, "Logout request failed; clearing local session anyway");
        }
        self.transition(AuthState::Unauthenticated);
    }

    fn transition(&mut self, next: AuthState) {
        if self.state != next {
            tracing::info!(
                from = self.state.name(),
                to = next.name(),
                "Session gate transition"
            );
        }
        self.state = next;
    }
}
