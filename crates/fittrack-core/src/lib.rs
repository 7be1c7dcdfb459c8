// ABOUTME: Core types and constants for the FitTrack activity tracking client
// ABOUTME: Foundation crate with error classification, pagination cursor, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitTrack` Core
//!
//! Foundation crate shared by the `FitTrack` client and its tools. It holds the
//! types that change rarely: the error taxonomy, the pagination cursor, the
//! opaque user/activity records and the backend route constants.
//!
//! ## Modules
//!
//! - **errors**: `ClientError` taxonomy and `ClientResult` alias
//! - **constants**: backend routes, wire field names and defaults
//! - **pagination**: page-number cursor, listing filters and page payload
//! - **models**: `User`, `Activity`, `ActivityType`, `Intensity`, `ActivityStats`

/// Error taxonomy for the API client and controllers
pub mod errors;

/// Backend routes, wire field names and default values
pub mod constants;

/// Page-number pagination cursor and listing filters
pub mod pagination;

/// Opaque user and activity records with typed accessors
pub mod models;
