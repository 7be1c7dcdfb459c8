// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Backend routes, wire field names, storage keys and client defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Client defaults
pub mod defaults {
    /// Base URL of the `FitTrack` backend API
    pub const API_BASE_URL: &str = "http://127.0.0.1:5000/api";
    /// Activities per listing page
    pub const PER_PAGE: u32 = 10;
    /// Connect timeout for the HTTP client in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("fittrack-client/", env!("CARGO_PKG_VERSION"));
    /// File name of the persisted session store
    pub const SESSION_FILE_NAME: &str = "session.json";
    /// Directory (under the user data dir) holding client state
    pub const DATA_DIR_NAME: &str = "fittrack";
}

/// Backend routes, relative to the API base URL
pub mod routes {
    /// Account registration
    pub const AUTH_REGISTER: &str = "/auth/registrar";
    /// Login
    pub const AUTH_LOGIN: &str = "/auth/login";
    /// Logout
    pub const AUTH_LOGOUT: &str = "/auth/logout";
    /// Currently authenticated user
    pub const AUTH_CURRENT_USER: &str = "/auth/usuario-atual";
    /// Profile update
    pub const AUTH_UPDATE_PROFILE: &str = "/auth/atualizar-perfil";
    /// Activities collection
    pub const ACTIVITIES: &str = "/atividades";
    /// Activity summary statistics
    pub const ACTIVITY_STATS: &str = "/atividades/resumo/stats";
}

/// Field names used on the wire by the backend
pub mod fields {
    /// User record in auth responses
    pub const USER: &str = "usuario";
    /// Error message key used by the backend
    pub const MESSAGE: &str = "mensagem";
    /// Generic error message key
    pub const MESSAGE_FALLBACK: &str = "message";
    /// Display name
    pub const NAME: &str = "nome";
    /// E-mail
    pub const EMAIL: &str = "email";
    /// Record identifier
    pub const ID: &str = "id";
    /// Activity type
    pub const ACTIVITY_TYPE: &str = "tipo";
    /// Activity intensity
    pub const INTENSITY: &str = "intensidade";
    /// Activity duration in minutes
    pub const DURATION: &str = "duracao";
    /// Activity distance in kilometres
    pub const DISTANCE: &str = "distancia";
    /// Activity timestamp (ISO-8601)
    pub const ACTIVITY_DATE: &str = "data_atividade";
    /// Free-form activity notes
    pub const NOTES: &str = "observacoes";
    /// Calories computed by the backend
    pub const CALORIES: &str = "calorias_queimadas";
    /// Profile: age in years
    pub const AGE: &str = "idade";
    /// Profile: weight in kilograms
    pub const WEIGHT: &str = "peso";
    /// Profile: height in centimetres
    pub const HEIGHT: &str = "altura";
    /// Listing query parameter: page number
    pub const PAGE: &str = "pagina";
    /// Listing query parameter: page size
    pub const PER_PAGE: &str = "por_pagina";
}

/// Keys of the persisted session store
pub mod storage_keys {
    /// Session token written by older frontends
    pub const TOKEN: &str = "token";
    /// Identifier of the logged-in user
    pub const USER_ID: &str = "usuarioId";
    /// Every key cleared on logout
    pub const SESSION_KEYS: [&str; 2] = [TOKEN, USER_ID];
}

/// MIME types
pub mod mime {
    /// JSON content type
    pub const APPLICATION_JSON: &str = "application/json";
}
