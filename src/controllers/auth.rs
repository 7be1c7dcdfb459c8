// ABOUTME: Session state holder tracking the authenticated user
// ABOUTME: Probes, logs in/out, registers and updates profiles while publishing a UI marker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::constants::storage_keys;
use crate::errors::{ClientError, ClientResult};
use crate::logging::AppLogger;
use crate::models::User;
use crate::session_store::SessionStore;

/// The client's belief about who is logged in
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Nobody is logged in
    #[default]
    Anonymous,
    /// A user is logged in
    Authenticated(User),
}

impl SessionState {
    /// Whether a user is logged in
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Outcome of [`AuthController::initialize`]
#[derive(Debug)]
pub enum SessionProbe {
    /// The backend recognized the session cookie
    Authenticated(User),
    /// No usable session; the failure that led here
    Anonymous(ClientError),
}

impl SessionProbe {
    /// Boolean view of the probe
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Presentation marker: two mutually exclusive flags
///
/// Both flags are false until the first session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiMarker {
    authenticated: bool,
    anonymous: bool,
}

impl UiMarker {
    /// Marker before any transition
    pub const UNSET: Self = Self {
        authenticated: false,
        anonymous: false,
    };

    /// Marker reflecting a session state
    #[must_use]
    pub const fn for_state(authenticated: bool) -> Self {
        Self {
            authenticated,
            anonymous: !authenticated,
        }
    }

    /// The "authenticated" flag
    #[must_use]
    pub const fn authenticated(self) -> bool {
        self.authenticated
    }

    /// The "anonymous" flag
    #[must_use]
    pub const fn anonymous(self) -> bool {
        self.anonymous
    }
}

/// Holds the session and drives the authentication endpoints
pub struct AuthController {
    api: Arc<ApiClient>,
    store: Arc<dyn SessionStore>,
    state: RwLock<SessionState>,
    marker: watch::Sender<UiMarker>,
}

impl AuthController {
    /// New controller in the `Anonymous` state
    #[must_use]
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn SessionStore>) -> Self {
        let (marker, _) = watch::channel(UiMarker::UNSET);
        Self {
            api,
            store,
            state: RwLock::new(SessionState::Anonymous),
            marker,
        }
    }

    /// Probe the backend for an existing session
    ///
    /// Never fails: any error leaves the controller `Anonymous` and is
    /// returned inside [`SessionProbe::Anonymous`].
    pub async fn initialize(&self) -> SessionProbe {
        match self.api.current_user().await.and_then(User::try_from) {
            Ok(user) => {
                AppLogger::log_auth_event("session_probe", true, user.id());
                self.transition(SessionState::Authenticated(user.clone()));
                SessionProbe::Authenticated(user)
            }
            Err(error) => {
                debug!(error = %error, kind = ?error.kind(), "No active session");
                self.transition(SessionState::Anonymous);
                SessionProbe::Anonymous(error)
            }
        }
    }

    /// Create an account; the backend logs the new user in
    ///
    /// # Errors
    ///
    /// Propagates request failures unchanged; returns `InvalidResponse` if the
    /// success body carries no `usuario` record. State is untouched on error.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<Value> {
        let response = self.api.register(name, email, password).await?;
        let user = User::from_auth_response(&response)?;
        AppLogger::log_auth_event("register", true, user.id());
        self.transition(SessionState::Authenticated(user));
        Ok(response)
    }

    /// Log in with e-mail and password
    ///
    /// # Errors
    ///
    /// Propagates request failures unchanged; returns `InvalidResponse` if the
    /// success body carries no `usuario` record. State is untouched on error.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Value> {
        debug!(%email, "Starting login");
        let response = match self.api.login(email, password).await {
            Ok(response) => response,
            Err(error) => {
                AppLogger::log_auth_event("login", false, None);
                return Err(error);
            }
        };

        let user = User::from_auth_response(&response).inspect_err(|error| {
            warn!(error = %error, "Login succeeded without a user record");
        })?;
        AppLogger::log_auth_event("login", true, user.id());
        self.transition(SessionState::Authenticated(user));
        Ok(response)
    }

    /// Log out and clear persisted session values
    ///
    /// # Errors
    ///
    /// Propagates request failures unchanged; the session is kept in that case.
    pub async fn logout(&self) -> ClientResult<()> {
        self.api.logout().await?;
        let user_id = self.current_user().and_then(|user| user.id());
        self.transition(SessionState::Anonymous);
        AppLogger::log_auth_event("logout", true, user_id);

        for key in storage_keys::SESSION_KEYS {
            if let Err(error) = self.store.remove(key).await {
                warn!(%key, error = %error, "Failed to clear persisted session value");
            }
        }
        Ok(())
    }

    /// Update profile fields and refresh the held user record
    ///
    /// Does not change whether the session is authenticated.
    ///
    /// # Errors
    ///
    /// Propagates request failures unchanged
    pub async fn update_profile<T: Serialize + ?Sized>(&self, profile: &T) -> ClientResult<Value> {
        let response = self.api.update_profile(profile).await?;
        match User::from_auth_response(&response) {
            Ok(updated) => {
                let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
                if let SessionState::Authenticated(user) = &mut *state {
                    *user = updated;
                }
            }
            Err(error) => warn!(error = %error, "Profile update returned no user record"),
        }
        Ok(response)
    }

    /// Whether a user is logged in
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read_state().is_authenticated()
    }

    /// Logged-in user, if any
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        match self.read_state() {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    /// Snapshot of the session state
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.read_state()
    }

    /// Receiver of the UI marker, updated on every transition
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiMarker> {
        self.marker.subscribe()
    }

    /// Current UI marker
    #[must_use]
    pub fn marker(&self) -> UiMarker {
        *self.marker.borrow()
    }

    fn read_state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn transition(&self, next: SessionState) {
        let marker = UiMarker::for_state(next.is_authenticated());
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
        self.marker.send_replace(marker);
    }
}
