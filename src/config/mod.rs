// ABOUTME: Configuration management module for the FitTrack client
// ABOUTME: Exposes environment-driven client settings (backend URL, timeouts, paging, session file)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the `FitTrack` client
//!
//! - **Environment**: client configuration from environment variables

/// Environment-based client configuration
pub mod environment;

pub use environment::ClientConfig;
