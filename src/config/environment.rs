// ABOUTME: Environment configuration management for the FitTrack client
// ABOUTME: Parses backend URL, timeouts, page size and session file location with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the API client and controllers

use std::env;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tracing::info;
use url::Url;

use crate::constants::defaults;

/// Environment variable holding the backend API base URL
pub const API_URL_VAR: &str = "FITTRACK_API_URL";
/// Environment variable holding the connect timeout in seconds
pub const CONNECT_TIMEOUT_VAR: &str = "FITTRACK_CONNECT_TIMEOUT_SECS";
/// Environment variable holding the optional overall request timeout in seconds
pub const REQUEST_TIMEOUT_VAR: &str = "FITTRACK_REQUEST_TIMEOUT_SECS";
/// Environment variable holding the listing page size
pub const PER_PAGE_VAR: &str = "FITTRACK_PER_PAGE";
/// Environment variable overriding the session store file
pub const SESSION_FILE_VAR: &str = "FITTRACK_SESSION_FILE";

/// Settings shared by the API client and the controllers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint is appended to (validated absolute http(s) URL)
    pub base_url: String,
    /// Maximum time to establish a TCP/TLS connection
    pub connect_timeout: Duration,
    /// Maximum time for a whole request; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    /// Page size the activities controller starts with
    pub per_page: NonZeroU32,
    /// Explicit session store location
    pub session_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_owned(),
            connect_timeout: Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
            request_timeout: None,
            per_page: NonZeroU32::new(defaults::PER_PAGE).unwrap_or(NonZeroU32::MIN),
            session_file: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed or fails validation
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(API_URL_VAR) {
            config.base_url = parse_base_url(&raw)?.into();
        }
        if let Ok(raw) = env::var(CONNECT_TIMEOUT_VAR) {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("Invalid {CONNECT_TIMEOUT_VAR} value: {raw}"))?;
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Ok(raw) = env::var(REQUEST_TIMEOUT_VAR) {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("Invalid {REQUEST_TIMEOUT_VAR} value: {raw}"))?;
            config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Ok(raw) = env::var(PER_PAGE_VAR) {
            config.per_page = raw
                .parse()
                .with_context(|| format!("Invalid {PER_PAGE_VAR} value (must be > 0): {raw}"))?;
        }
        config.session_file = env::var_os(SESSION_FILE_VAR).map(PathBuf::from);

        config.validate()?;
        info!(base_url = %config.base_url, "Client configuration loaded");
        Ok(config)
    }

    /// Default configuration pointed at another backend
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?.into(),
            ..Self::default()
        })
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        let url = parse_base_url(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow!(
                "{API_URL_VAR} must use http or https, got {}",
                url.scheme()
            ));
        }
        if self.connect_timeout.is_zero() {
            return Err(anyhow!("{CONNECT_TIMEOUT_VAR} must be greater than 0"));
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready for endpoint concatenation
    #[must_use]
    pub fn api_base(&self) -> String {
        self.base_url.trim_end_matches('/').to_owned()
    }

    /// Scheme, host and port of the backend, as shown in connectivity errors
    #[must_use]
    pub fn origin(&self) -> String {
        Url::parse(&self.base_url).map_or_else(
            |_| self.api_base(),
            |url| url.origin().ascii_serialization(),
        )
    }

    /// Where the file session store lives
    ///
    /// Uses the explicit setting when present, else the platform data directory.
    #[must_use]
    pub fn session_file_path(&self) -> Option<PathBuf> {
        self.session_file.clone().or_else(|| {
            dirs::data_dir().map(|dir| {
                dir.join(defaults::DATA_DIR_NAME)
                    .join(defaults::SESSION_FILE_NAME)
            })
        })
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitTrack Client Configuration:\n\
             - API: {}\n\
             - Connect timeout: {}s\n\
             - Request timeout: {}\n\
             - Page size: {}\n\
             - Session file: {}",
            self.base_url,
            self.connect_timeout.as_secs(),
            self.request_timeout
                .map_or_else(|| "none".to_owned(), |t| format!("{}s", t.as_secs())),
            self.per_page,
            self.session_file_path()
                .map_or_else(|| "in-memory".to_owned(), |p| p.display().to_string()),
        )
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid {API_URL_VAR}: {raw}"))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("{API_URL_VAR} must be an absolute URL: {raw}"));
    }
    Ok(url)
}
