// ABOUTME: Integration tests for the request normalizer
// ABOUTME: Covers body parsing, server message extraction, connectivity and header handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::net::TcpListener;

use fittrack_client::api::{ApiClient, Payload, RequestOptions};
use fittrack_client::config::ClientConfig;
use fittrack_client::errors::{ClientError, ErrorKind};
use fittrack_client::pagination::ActivityFilters;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{api_for, init_test_logging, page_json};

#[tokio::test]
async fn test_json_success_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let payload = api_for(&server)
        .request("/ping", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(payload, Payload::Json(json!({"ok": true})));
}

#[tokio::test]
async fn test_non_json_success_is_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("healthy"))
        .mount(&server)
        .await;

    let payload = api_for(&server)
        .request("/health", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(payload, Payload::Text("healthy".into()));
}

#[tokio::test]
async fn test_server_error_uses_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"mensagem": "Credenciais inválidas"})),
        )
        .mount(&server)
        .await;

    let error = api_for(&server)
        .login("ana@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Server);
    assert_eq!(error.status(), Some(401));
    assert!(error.is_unauthorized());
    assert_eq!(error.to_string(), "Credenciais inválidas");
}

#[tokio::test]
async fn test_server_error_falls_back_to_message_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/atividades/9"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let error = api_for(&server).get_activity(9).await.unwrap_err();
    assert_eq!(error.to_string(), "boom");
}

#[tokio::test]
async fn test_server_error_with_text_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/atividades/1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .mount(&server)
        .await;

    let error = api_for(&server).get_activity(1).await.unwrap_err();
    assert!(matches!(
        &error,
        ClientError::Server { status: 502, message } if message == "Bad gateway"
    ));
}

#[tokio::test]
async fn test_server_error_without_body_uses_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/atividades/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = api_for(&server).delete_activity(3).await.unwrap_err();
    assert_eq!(error.to_string(), "Error 404");
}

#[tokio::test]
async fn test_server_error_with_unparseable_json_uses_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/usuario-atual"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let error = api_for(&server).current_user().await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Server);
    assert_eq!(error.to_string(), "Error 500");
}

#[tokio::test]
async fn test_malformed_json_success_is_unclassified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/usuario-atual"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"usuario\":", "application/json"))
        .mount(&server)
        .await;

    let error = api_for(&server).current_user().await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Unclassified);
}

#[tokio::test]
async fn test_unreachable_backend_is_connectivity() {
    init_test_logging();
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig::with_base_url(&format!("http://127.0.0.1:{port}/api")).unwrap();
    let api = ApiClient::new(&config).unwrap();

    let error = api.current_user().await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Connectivity);
    assert_eq!(
        error.to_string(),
        format!(
            "Could not connect to the server. Check that the backend is running at http://127.0.0.1:{port}"
        )
    );
}

#[tokio::test]
async fn test_default_content_type_and_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/registrar"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "nome": "Ana",
            "email": "ana@example.com",
            "senha": "Secret123!"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"usuario": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server)
        .register("Ana", "ana@example.com", "Secret123!")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/raw"))
        .and(header("content-type", "text/plain"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new(Method::PUT)
        .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
        .with_body("hello");
    let payload = api_for(&server).request("/raw", options).await.unwrap();
    assert_eq!(payload, Payload::Text(String::new()));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers.get_all(CONTENT_TYPE).iter().count(), 1);
}

#[tokio::test]
async fn test_session_cookie_is_sent_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123; Path=/")
                .set_body_json(json!({"usuario": {"id": 1}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/usuario-atual"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"usuario": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.login("ana@example.com", "Secret123!").await.unwrap();
    api.current_user().await.unwrap();
}

#[tokio::test]
async fn test_listing_query_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/atividades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[], 2, 2)))
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.list_activities(&ActivityFilters::default()).await.unwrap();
    let filters = ActivityFilters::default()
        .with_per_page(10)
        .with_type("corrida")
        .with_page(2);
    let page = api.list_activities(&filters).await.unwrap();
    assert_eq!(page.page, Some(2));
    assert!(!page.has_next());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[1].url.query(), Some("tipo=corrida&pagina=2&por_pagina=10"));
}

#[tokio::test]
async fn test_non_object_listing_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/atividades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let error = api_for(&server)
        .list_activities(&ActivityFilters::default())
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidResponse);
}
