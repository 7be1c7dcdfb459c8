// ABOUTME: Core data models for the FitTrack client
// ABOUTME: Re-exports User, Activity, ActivityType, Intensity and ActivityStats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records are server-owned: the client keeps them as JSON objects and only
//! exposes typed accessors for the handful of fields it actually reads.
//! Values this client does not recognize never make parsing fail.

mod activity;
mod stats;
mod user;

pub use activity::{Activity, ActivityType, Intensity};
pub use stats::ActivityStats;
pub use user::User;
