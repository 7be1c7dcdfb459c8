// ABOUTME: HTTP request normalizer for the FitTrack REST backend
// ABOUTME: Builds requests, parses responses by content type and classifies every failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # API Client
//!
//! [`ApiClient::request`] is the single boundary between the transport and
//! the rest of the crate. It returns either the parsed body or a
//! [`ClientError`] whose variant was decided here:
//!
//! - no HTTP response at all → [`ClientError::Connectivity`]
//! - non-2xx status → [`ClientError::Server`] with the body's message
//! - anything else (unreadable body, malformed JSON) → [`ClientError::Unclassified`]
//!
//! Endpoint bindings live in the [`auth`] and [`activities`] submodules.

/// Activity endpoints
pub mod activities;
/// Authentication endpoints
pub mod auth;

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::constants::{defaults, fields, mime};
use crate::errors::{ClientError, ClientResult};
use crate::logging::AppLogger;

/// Parsed response body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body declared as `application/json`
    Json(Value),
    /// Any other body, read as text
    Text(String),
}

impl Payload {
    /// View the payload as JSON; text becomes a JSON string
    #[must_use]
    pub fn into_json(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }

    /// Message to report when this payload came with a non-2xx status
    ///
    /// Objects yield their `mensagem`/`message` field, strings and text yield
    /// themselves, numbers their decimal form. Empty values yield `None`.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        let message = match self {
            Self::Text(text) => Some(text.clone()),
            Self::Json(Value::Object(map)) => [fields::MESSAGE, fields::MESSAGE_FALLBACK]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::to_owned),
            Self::Json(Value::String(text)) => Some(text.clone()),
            Self::Json(Value::Number(number)) => Some(number.to_string()),
            Self::Json(Value::Null | Value::Bool(_) | Value::Array(_)) => None,
        };
        message.filter(|m| !m.is_empty())
    }

    /// Decode a JSON payload into a typed response
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] when the payload does not have the expected shape
    pub fn decode<T: DeserializeOwned>(self, what: &str) -> ClientResult<T> {
        serde_json::from_value(self.into_json())
            .map_err(|e| ClientError::invalid_response(format!("{what}: {e}")))
    }
}

/// Per-call request descriptor
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method, `GET` when unset
    pub method: Option<Method>,
    /// Extra headers; they replace the defaults on name collision
    pub headers: HeaderMap,
    /// Pre-serialized body
    pub body: Option<String>,
}

impl RequestOptions {
    /// Options for the given method with no body
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method: Some(method),
            ..Self::default()
        }
    }

    /// Add or replace a header
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach an already serialized body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `body` as JSON and attach it
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unclassified`] if the value cannot be serialized
    pub fn with_json<T: Serialize + ?Sized>(self, body: &T) -> ClientResult<Self> {
        let serialized = serde_json::to_string(body)
            .map_err(|e| ClientError::unclassified("serializing request body", e))?;
        Ok(self.with_body(serialized))
    }
}

/// Client for the `FitTrack` REST API
///
/// Cheap to share behind an `Arc`; the inner cookie store keeps the backend
/// session cookie for every later request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    origin: String,
}

impl ApiClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unclassified`] if the HTTP client cannot be constructed
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .connect_timeout(config.connect_timeout)
            .user_agent(defaults::USER_AGENT);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::unclassified("building HTTP client", e))?;

        Ok(Self {
            http,
            base_url: config.api_base(),
            origin: config.origin(),
        })
    }

    /// Base URL endpoints are appended to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and normalize the outcome
    ///
    /// # Errors
    ///
    /// - [`ClientError::Connectivity`] when no HTTP response was obtained
    /// - [`ClientError::Server`] for non-2xx statuses
    /// - [`ClientError::Unclassified`] for unreadable or malformed bodies
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> ClientResult<Payload> {
        let url = format!("{}{endpoint}", self.base_url);
        let method = options.method.unwrap_or(Method::GET);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(mime::APPLICATION_JSON));
        headers.extend(options.headers);

        let mut builder = self.http.request(method.clone(), &url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        debug!(%method, %url, "Sending request");
        let started = Instant::now();
        let response = builder.send().await.map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        AppLogger::log_api_request(
            method.as_str(),
            &url,
            status.as_u16(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        let declares_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.contains(mime::APPLICATION_JSON));
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::unclassified("reading response body", e))?;

        if status.is_success() {
            return if declares_json {
                serde_json::from_str(&text)
                    .map(Payload::Json)
                    .map_err(|e| ClientError::unclassified("parsing JSON response body", e))
            } else {
                Ok(Payload::Text(text))
            };
        }

        let payload = if declares_json {
            serde_json::from_str(&text).map(Payload::Json).ok()
        } else {
            Some(Payload::Text(text))
        };
        let message = payload
            .as_ref()
            .and_then(Payload::error_message)
            .unwrap_or_else(|| ClientError::fallback_server_message(status.as_u16()));

        warn!(%method, %url, status = status.as_u16(), %message, "Request rejected by server");
        Err(ClientError::server(status.as_u16(), message))
    }

    /// Issue a request and return its body as JSON
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::request`]
    pub async fn request_json(&self, endpoint: &str, options: RequestOptions) -> ClientResult<Value> {
        self.request(endpoint, options).await.map(Payload::into_json)
    }

    /// No response means the backend was never reached, unless the request itself was malformed
    fn classify_send_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_builder() {
            warn!(error = %error, "Request could not be built");
            return ClientError::unclassified("building request", error);
        }
        warn!(error = %error, origin = %self.origin, "Backend unreachable");
        ClientError::connectivity(&self.origin, error.to_string())
    }
}
