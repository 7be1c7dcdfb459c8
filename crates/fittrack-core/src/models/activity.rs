// ABOUTME: Activity record plus the activity type and intensity enumerations
// ABOUTME: Activities stay opaque JSON objects; typed accessors parse the fields the client reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::fields;
use crate::errors::ClientError;

/// Kinds of activity the backend knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    /// Running
    #[serde(rename = "corrida")]
    Running,
    /// Walking
    #[serde(rename = "caminhada")]
    Walking,
    /// Cycling
    #[serde(rename = "ciclismo")]
    Cycling,
    /// Strength training
    #[serde(rename = "musculacao")]
    Strength,
    /// Swimming
    #[serde(rename = "natacao")]
    Swimming,
    /// Martial arts
    #[serde(rename = "artesmarciais")]
    MartialArts,
    /// Yoga
    #[serde(rename = "yoga")]
    Yoga,
}

impl ActivityType {
    /// Every activity type, in the order the backend documents them
    pub const ALL: [Self; 7] = [
        Self::Running,
        Self::Walking,
        Self::Cycling,
        Self::Strength,
        Self::Swimming,
        Self::MartialArts,
        Self::Yoga,
    ];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "corrida",
            Self::Walking => "caminhada",
            Self::Cycling => "ciclismo",
            Self::Strength => "musculacao",
            Self::Swimming => "natacao",
            Self::MartialArts => "artesmarciais",
            Self::Yoga => "yoga",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown activity type: {s}"))
    }
}

/// Effort level of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Intensity {
    /// Low effort
    #[serde(rename = "baixa")]
    Low,
    /// Moderate effort, the backend default
    #[default]
    #[serde(rename = "moderada")]
    Moderate,
    /// High effort
    #[serde(rename = "alta")]
    High,
}

impl Intensity {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "baixa",
            Self::Moderate => "moderada",
            Self::High => "alta",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baixa" => Ok(Self::Low),
            "moderada" => Ok(Self::Moderate),
            "alta" => Ok(Self::High),
            other => Err(format!("unknown intensity: {other}")),
        }
    }
}

/// Server-owned activity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Activity(Map<String, Value>);

impl Activity {
    /// Numeric identifier
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.0.get(fields::ID).and_then(Value::as_i64)
    }

    /// Raw `tipo` value
    #[must_use]
    pub fn raw_type(&self) -> Option<&str> {
        self.0.get(fields::ACTIVITY_TYPE).and_then(Value::as_str)
    }

    /// Parsed activity type, `None` when absent or unknown
    #[must_use]
    pub fn activity_type(&self) -> Option<ActivityType> {
        self.raw_type().and_then(|t| t.parse().ok())
    }

    /// Parsed intensity, `None` when absent or unknown
    #[must_use]
    pub fn intensity(&self) -> Option<Intensity> {
        self.0
            .get(fields::INTENSITY)
            .and_then(Value::as_str)
            .and_then(|i| i.parse().ok())
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

    /// Consume into the underlying JSON object
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Activity {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Activity {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ClientError::invalid_response(format!(
                "expected an activity object, got {other}"
            ))),
        }
    }
}
