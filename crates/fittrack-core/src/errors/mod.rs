// ABOUTME: Error handling for the FitTrack client with a tagged error taxonomy
// ABOUTME: Re-exports ClientError, ErrorKind and the ClientResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Every failure the client can surface is classified once, at the request
//! normalization boundary, into one of four variants. Downstream code matches
//! on [`ErrorKind`] and never inspects message text.

mod client;

pub use client::{ClientError, ClientResult, ErrorKind};
