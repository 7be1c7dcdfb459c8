// ABOUTME: Main library entry point for the FitTrack activity tracking client
// ABOUTME: Provides the normalizing API client, session and activity controllers, and view helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitTrack` Client
//!
//! Client library for the `FitTrack` fitness-activity service. It logs users
//! in against the REST backend, performs CRUD on activity records and hands
//! the results to presentation code.
//!
//! ## Architecture
//!
//! - **api**: `ApiClient`, the request normalizer and one method per route
//! - **controllers**: `AuthController` (session state) and
//!   `ActivitiesController` (cursor, cached list, statistics)
//! - **`session_store`**: persisted session values (memory or JSON file)
//! - **presentation**: formatting and validation helpers for views
//! - **config** / **logging**: environment-driven setup
//!
//! Nothing is global: the application builds the client and controllers and
//! passes them around in `Arc`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fittrack_client::api::ApiClient;
//! use fittrack_client::config::ClientConfig;
//! use fittrack_client::controllers::{ActivitiesController, AuthController};
//! use fittrack_client::pagination::ActivityFilters;
//! use fittrack_client::session_store::MemorySessionStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let api = Arc::new(ApiClient::new(&config)?);
//!     let auth = AuthController::new(api.clone(), Arc::new(MemorySessionStore::new()));
//!     let activities = ActivitiesController::new(api, config.per_page);
//!
//!     auth.login("ana@example.com", "Secret123!").await?;
//!     let page = activities.list(&ActivityFilters::default().with_type("corrida")).await?;
//!     println!("{} activities", page.activities.len());
//!     Ok(())
//! }
//! ```

pub use fittrack_core::{constants, errors, models, pagination};

/// Request normalizer and endpoint bindings
pub mod api;

/// Environment-driven client configuration
pub mod config;

/// Session and activity controllers
pub mod controllers;

/// Logging configuration and structured log helpers
pub mod logging;

/// Formatting and validation helpers for view code
pub mod presentation;

/// Persisted session values
pub mod session_store;
