// ABOUTME: Opaque user record returned by the authentication endpoints
// ABOUTME: Guarantees a user is always a complete JSON object, never a partial value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::fields;
use crate::errors::ClientError;

/// Authenticated user as described by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Map<String, Value>);

impl User {
    /// Numeric identifier, if the backend sent one
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.0.get(fields::ID).and_then(Value::as_i64)
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get(fields::NAME).and_then(Value::as_str)
    }

    /// E-mail address
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.0.get(fields::EMAIL).and_then(Value::as_str)
    }

    /// Any field by wire name
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// All fields
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Extract the `usuario` record of an auth response
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] when the field is absent or not an object.
    pub fn from_auth_response(response: &Value) -> Result<Self, ClientError> {
        match response.get(fields::USER) {
            Some(Value::Object(map)) => Ok(Self(map.clone())),
            Some(_) => Err(ClientError::invalid_response(
                "`usuario` is not an object",
            )),
            None => Err(ClientError::invalid_response("missing `usuario` record")),
        }
    }
}

impl From<Map<String, Value>> for User {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for User {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ClientError::invalid_response(format!(
                "expected a user object, got {other}"
            ))),
        }
    }
}
