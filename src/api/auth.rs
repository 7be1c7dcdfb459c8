// ABOUTME: Authentication endpoint bindings for the FitTrack API client
// ABOUTME: Registration, login, logout, current-user lookup and profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, RequestOptions};
use crate::constants::routes;
use crate::errors::ClientResult;

#[derive(Serialize)]
struct RegisterBody<'a> {
    nome: &'a str,
    email: &'a str,
    senha: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    senha: &'a str,
}

impl ApiClient {
    /// `POST /auth/registrar`
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<Value> {
        let body = RegisterBody {
            nome: name,
            email,
            senha: password,
        };
        let options = RequestOptions::new(Method::POST).with_json(&body)?;
        self.request_json(routes::AUTH_REGISTER, options).await
    }

    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Value> {
        let body = LoginBody {
            email,
            senha: password,
        };
        let options = RequestOptions::new(Method::POST).with_json(&body)?;
        self.request_json(routes::AUTH_LOGIN, options).await
    }

    /// `POST /auth/logout`
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure
    pub async fn logout(&self) -> ClientResult<Value> {
        self.request_json(routes::AUTH_LOGOUT, RequestOptions::new(Method::POST))
            .await
    }

    /// `GET /auth/usuario-atual`
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure
    pub async fn current_user(&self) -> ClientResult<Value> {
        self.request_json(routes::AUTH_CURRENT_USER, RequestOptions::default())
            .await
    }

    /// `PUT /auth/atualizar-perfil` with arbitrary profile fields
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure
    pub async fn update_profile<T: Serialize + ?Sized>(&self, profile: &T) -> ClientResult<Value> {
        let options = RequestOptions::new(Method::PUT).with_json(profile)?;
        self.request_json(routes::AUTH_UPDATE_PROFILE, options).await
    }
}
