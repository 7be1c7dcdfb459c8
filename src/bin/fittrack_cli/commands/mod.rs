// ABOUTME: Command modules for fittrack-cli plus the shared controller context
// ABOUTME: Context wraps login/logout so session commands run inside one backend session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod account;
pub mod activities;

use anyhow::{Context as _, Result};
use fittrack_client::controllers::{ActivitiesController, AuthController};
use tracing::warn;

/// Controllers built by `main` for one invocation
pub struct Context {
    /// Session state
    pub auth: AuthController,
    /// Activity listing and CRUD
    pub activities: ActivitiesController,
}

impl Context {
    /// Log in; the session cookie lives only as long as this process
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        self.auth
            .login(email, password)
            .await
            .with_context(|| format!("Login failed for {email}"))?;
        Ok(())
    }

    /// Log out, reporting but not failing on errors
    pub async fn logout(&self) {
        if let Err(error) = self.auth.logout().await {
            warn!(error = %error, "Logout failed");
        }
    }
}
