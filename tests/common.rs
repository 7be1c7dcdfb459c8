// ABOUTME: Shared test utilities for FitTrack client integration tests
// ABOUTME: Builds API clients against wiremock servers and canned backend payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fittrack_client`

use std::sync::{Arc, Once};

use fittrack_client::api::ApiClient;
use fittrack_client::config::ClientConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Configuration pointing at `<server>/api`
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::with_base_url(&format!("{}/api", server.uri())).unwrap()
}

/// API client pointing at `<server>/api`
pub fn api_for(server: &MockServer) -> Arc<ApiClient> {
    init_test_logging();
    Arc::new(ApiClient::new(&config_for(server)).unwrap())
}

/// Backend user record
pub fn user_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "nome": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "peso": 70.0,
        "altura": 175
    })
}

/// Backend activity record
pub fn activity_json(id: i64, tipo: &str) -> Value {
    json!({
        "id": id,
        "tipo": tipo,
        "duracao": 30,
        "distancia": 5.0,
        "intensidade": "moderada",
        "calorias_queimadas": 300.0,
        "data_atividade": "2025-03-07T08:00:00"
    })
}

/// Backend listing page
pub fn page_json(activities: &[Value], page: u32, total_pages: u32) -> Value {
    json!({
        "atividades": activities,
        "total": activities.len(),
        "pagina": page,
        "por_pagina": 10,
        "total_paginas": total_pages
    })
}

/// Backend statistics summary
pub fn stats_json(total: u64) -> Value {
    json!({
        "total_atividades": total,
        "total_duracao_minutos": total * 30,
        "total_distancia_km": 5.0 * total as f64,
        "total_calorias": 300.0 * total as f64,
        "atividade_favorita": "corrida",
        "distribuicao_tipos": {"corrida": total}
    })
}
