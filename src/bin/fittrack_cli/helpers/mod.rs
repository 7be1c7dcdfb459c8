// ABOUTME: Re-exports helper modules for fittrack-cli
// ABOUTME: Provides terminal display formatting for users, activities and statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
