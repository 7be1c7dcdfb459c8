// ABOUTME: Resource controllers orchestrating the API client for views
// ABOUTME: Auth controller owns session state; activities controller owns cursor, list and stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Controllers sit between view code and [`ApiClient`](crate::api::ApiClient).
//!
//! They are plain values built by the application's composition root and
//! shared through `Arc`; every method takes `&self`.

/// Activity listing, CRUD and statistics
pub mod activities;
/// Session state holder
pub mod auth;

pub use activities::ActivitiesController;
pub use auth::{AuthController, SessionProbe, SessionState, UiMarker};
