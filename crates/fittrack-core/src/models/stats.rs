// ABOUTME: Summary statistics over the user's activities
// ABOUTME: Mirrors the backend's /atividades/resumo/stats payload, keeping unknown fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregated figures for the logged-in user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    /// Number of recorded activities
    #[serde(rename = "total_atividades", default)]
    pub total_activities: u64,
    /// Summed duration in minutes
    #[serde(rename = "total_duracao_minutos", default)]
    pub total_duration_minutes: u64,
    /// Summed distance in kilometres
    #[serde(rename = "total_distancia_km", default)]
    pub total_distance_km: f64,
    /// Summed calories burned
    #[serde(rename = "total_calorias", default)]
    pub total_calories: f64,
    /// Most frequent activity type
    #[serde(rename = "atividade_favorita", default)]
    pub favorite_activity: Option<String>,
    /// Activity count per type
    #[serde(rename = "distribuicao_tipos", default)]
    pub type_distribution: BTreeMap<String, u64>,
    /// Server fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
