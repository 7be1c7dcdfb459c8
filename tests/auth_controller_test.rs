// ABOUTME: Integration tests for the session state holder
// ABOUTME: Validates probe, login, registration, logout and profile updates against a mock backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use fittrack_client::controllers::{AuthController, SessionProbe, SessionState, UiMarker};
use fittrack_client::errors::ErrorKind;
use fittrack_client::session_store::{MemorySessionStore, SessionStore};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{api_for, user_json};

fn controller(server: &MockServer) -> (AuthController, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    (AuthController::new(api_for(server), store.clone()), store)
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mensagem": "Login realizado com sucesso",
            "usuario": user_json(7, "Ana")
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_marker_unset_before_first_transition() {
    let server = MockServer::start().await;
    let (auth, _) = controller(&server);

    assert_eq!(auth.marker(), UiMarker::UNSET);
    assert!(!auth.marker().authenticated());
    assert!(!auth.marker().anonymous());
    assert_eq!(auth.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_initialize_with_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/usuario-atual"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7, "Ana")))
        .expect(1)
        .mount(&server)
        .await;
    let (auth, _) = controller(&server);
    let mut marker = auth.subscribe();

    let probe = auth.initialize().await;
    assert!(probe.is_authenticated());
    assert!(auth.is_authenticated());
    assert_eq!(auth.current_user().unwrap().id(), Some(7));

    assert!(marker.has_changed().unwrap());
    let seen = *marker.borrow_and_update();
    assert!(seen.authenticated());
    assert!(!seen.anonymous());
}

#[tokio::test]
async fn test_initialize_without_session_never_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/usuario-atual"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"mensagem": "Não autenticado"})))
        .mount(&server)
        .await;
    let (auth, _) = controller(&server);

    match auth.initialize().await {
        SessionProbe::Anonymous(error) => {
            assert_eq!(error.kind(), ErrorKind::Server);
            assert_eq!(error.to_string(), "Não autenticado");
        }
        SessionProbe::Authenticated(user) => panic!("unexpected session for {user:?}"),
    }
    assert!(!auth.is_authenticated());
    assert!(auth.marker().anonymous());
}

#[tokio::test]
async fn test_initialize_with_non_object_payload_is_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/usuario-atual"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("nobody")))
        .mount(&server)
        .await;
    let (auth, _) = controller(&server);

    let probe = auth.initialize().await;
    assert!(!probe.is_authenticated());
    assert_eq!(auth.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_login_success_sets_user_and_returns_response() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    let (auth, _) = controller(&server);

    let response = auth.login("ana@example.com", "Secret123!").await.unwrap();
    assert_eq!(response["mensagem"], "Login realizado com sucesso");
    assert!(auth.is_authenticated());
    assert_eq!(auth.current_user().unwrap().name(), Some("Ana"));
    assert!(auth.marker().authenticated());
}

#[tokio::test]
async fn test_login_failure_keeps_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"mensagem": "Credenciais inválidas"})))
        .mount(&server)
        .await;
    let (auth, _) = controller(&server);

    let error = auth.login("ana@example.com", "wrong").await.unwrap_err();
    assert_eq!(error.to_string(), "Credenciais inválidas");
    assert!(!auth.is_authenticated());
    assert_eq!(auth.marker(), UiMarker::UNSET);
}

#[tokio::test]
async fn test_login_without_user_record_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mensagem": "ok"})))
        .mount(&server)
        .await;
    let (auth, _) = controller(&server);

    let error = auth.login("ana@example.com", "Secret123!").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidResponse);
    assert_eq!(auth.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_register_logs_new_user_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/registrar"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "mensagem": "Usuário registrado com sucesso",
            "usuario": user_json(8, "Bia")
        })))
        .mount(&server)
        .await;
    let (auth, _) = controller(&server);

    auth.register("Bia", "bia@example.com", "Secret123!").await.unwrap();
    assert_eq!(auth.current_user().unwrap().id(), Some(8));
}

#[tokio::test]
async fn test_register_conflict_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/registrar"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"mensagem": "Email já cadastrado"})))
        .mount(&server)
        .await;
    let (auth, _) = controller(&server);

    let error = auth.register("Bia", "bia@example.com", "Secret123!").await.unwrap_err();
    assert_eq!(error.status(), Some(409));
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_state_and_store() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mensagem": "Logout realizado"})))
        .expect(1)
        .mount(&server)
        .await;
    let (auth, store) = controller(&server);
    store.set("token", "legacy").await.unwrap();
    store.set("usuarioId", "7").await.unwrap();
    store.set("theme", "dark").await.unwrap();

    auth.login("ana@example.com", "Secret123!").await.unwrap();
    auth.logout().await.unwrap();

    assert!(!auth.is_authenticated());
    assert!(auth.marker().anonymous());
    assert_eq!(store.get("token").await.unwrap(), None);
    assert_eq!(store.get("usuarioId").await.unwrap(), None);
    assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
}

#[tokio::test]
async fn test_logout_failure_keeps_session() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let (auth, store) = controller(&server);
    store.set("usuarioId", "7").await.unwrap();

    auth.login("ana@example.com", "Secret123!").await.unwrap();
    let error = auth.logout().await.unwrap_err();

    assert_eq!(error.to_string(), "Error 500");
    assert!(auth.is_authenticated());
    assert_eq!(store.get("usuarioId").await.unwrap().as_deref(), Some("7"));
}

#[tokio::test]
async fn test_update_profile_replaces_user_record() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/auth/atualizar-perfil"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mensagem": "Perfil atualizado",
            "usuario": {"id": 7, "nome": "Ana Maria", "peso": 68.5}
        })))
        .mount(&server)
        .await;
    let (auth, _) = controller(&server);

    auth.login("ana@example.com", "Secret123!").await.unwrap();
    auth.update_profile(&json!({"nome": "Ana Maria", "peso": 68.5}))
        .await
        .unwrap();

    let user = auth.current_user().unwrap();
    assert_eq!(user.name(), Some("Ana Maria"));
    assert_eq!(user.get("peso"), Some(&json!(68.5)));
}

#[tokio::test]
async fn test_update_profile_does_not_authenticate() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/auth/atualizar-perfil"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usuario": {"id": 7, "nome": "Ana"}
        })))
        .mount(&server)
        .await;
    let (auth, _) = controller(&server);

    auth.update_profile(&json!({"nome": "Ana"})).await.unwrap();
    assert!(!auth.is_authenticated());
}
