//! Wire-level dispatch tests against a mock backend.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use tombola_auth::{MemoryTokenStore, TokenStore};
use tombola_client::{
    AdminLoginRequest, Error, ListContestantsQuery, RegisterContestantRequest, RequestDescriptor,
    TombolaClient,
};

fn client_with_store(server: &MockServer, store: Arc<MemoryTokenStore>) -> TombolaClient {
    TombolaClient::builder()
        .base_url(format!("{}/api", server.uri()))
        .token_store(store)
        .build()
        .unwrap()
}

fn client_without_store(server: &MockServer) -> TombolaClient {
    TombolaClient::builder()
        .base_url(format!("{}/api", server.uri()))
        .build()
        .unwrap()
}

/// Matches requests carrying no Authorization header at all.
struct NoAuthorizationHeader;

impl Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Matches requests whose URL has no query string, not even a bare `?`.
struct NoQueryString;

impl Match for NoQueryString {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().is_none()
    }
}

fn contestants_page() -> serde_json::Value {
    json!({
        "count": 1,
        "page": 1,
        "page_size": 50,
        "contestants": [{
            "id": 1,
            "first_name": "Ana",
            "last_name": "Rojas",
            "second_last_name": "",
            "full_name": "Ana Rojas",
            "email": "ana@example.com",
            "phone": "+56912345678",
            "is_verified": true,
            "created_at": "2025-02-14T12:00:00Z"
        }]
    })
}

fn winner_body() -> serde_json::Value {
    json!({
        "winner": {
            "id": 1,
            "contestant": 1,
            "contestant_name": "Ana Rojas",
            "contestant_email": "ana@example.com",
            "contestant_phone": "+56912345678",
            "drawn_at": "2025-02-14T18:00:00Z"
        }
    })
}

#[tokio::test]
async fn stored_token_is_sent_as_bearer_header() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::with_token("tok"));

    Mock::given(method("GET"))
        .and(path("/api/admin/contestants/"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contestants_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_store(&server, store);
    let page = client
        .contestants()
        .list(ListContestantsQuery::default())
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.contestants[0].email, "ana@example.com");
}

#[tokio::test]
async fn token_is_read_fresh_on_every_dispatch() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::new());

    Mock::given(method("GET"))
        .and(path("/api/admin/contestants/"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(contestants_page()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/contestants/"))
        .and(header("authorization", "Bearer late-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contestants_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_store(&server, store.clone());

    // First call: store is empty, so nothing is attached.
    client
        .contestants()
        .list(ListContestantsQuery::default())
        .await
        .unwrap();

    // Token written after the client was built is still picked up.
    store.set("late-token");
    client
        .contestants()
        .list(ListContestantsQuery::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn caller_authorization_header_wins_over_stored_token() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::with_token("stored"));

    Mock::given(method("GET"))
        .and(path("/api/admin/winner/"))
        .and(header("authorization", "Bearer other"))
        .respond_with(ResponseTemplate::new(200).set_body_json(winner_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_store(&server, store);
    let descriptor =
        RequestDescriptor::get("admin/winner/").header("Authorization", "Bearer other");

    let body: serde_json::Value = client.dispatch(descriptor).await.unwrap();
    assert_eq!(body["winner"]["contestant_name"], "Ana Rojas");
}

#[tokio::test]
async fn no_store_means_no_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contestants/"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "¡Gracias por registrarte!",
            "contestant_id": 7
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_without_store(&server);
    let response = client
        .contestants()
        .register(RegisterContestantRequest {
            first_name: "Ana".to_string(),
            last_name: "Rojas".to_string(),
            second_last_name: None,
            email: "ana@example.com".to_string(),
            phone: "+56912345678".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.contestant_id, 7);
}

#[tokio::test]
async fn empty_query_appends_no_question_mark() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::with_token("tok"));

    Mock::given(method("GET"))
        .and(path("/api/admin/contestants/"))
        .and(NoQueryString)
        .respond_with(ResponseTemplate::new(200).set_body_json(contestants_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_store(&server, store);
    client
        .contestants()
        .list(ListContestantsQuery::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn page_filter_is_serialized_into_the_query_string() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::with_token("tok"));

    Mock::given(method("GET"))
        .and(path("/api/admin/contestants/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contestants_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_store(&server, store);
    client
        .contestants()
        .list(ListContestantsQuery {
            page: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn login_and_store_persists_the_access_token() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::new());

    Mock::given(method("POST"))
        .and(path("/api/admin/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "header.payload.sig",
            "refresh": "refresh.payload.sig"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_store(&server, store.clone());
    let tokens = client
        .admin()
        .login_and_store(AdminLoginRequest {
            username: "admin".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(tokens.access, "header.payload.sig");
    assert_eq!(store.get(), Some("header.payload.sig".to_string()));
}

#[tokio::test]
async fn unauthorized_surfaces_as_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/contestants/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Authentication credentials were not provided."
        })))
        .mount(&server)
        .await;

    let client = client_without_store(&server);
    let err = client
        .contestants()
        .list(ListContestantsQuery::default())
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert!(
        err.to_string()
            .contains("Authentication credentials were not provided")
    );
}

#[tokio::test]
async fn missing_winner_surfaces_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/winner/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Aún no se ha realizado el sorteo."
        })))
        .mount(&server)
        .await;

    let client = client_without_store(&server);
    let err = client.admin().winner().await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn repeated_draw_surfaces_as_api_error_with_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/winner/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Ya se ha realizado el sorteo. Solo se permite un ganador."
        })))
        .mount(&server)
        .await;

    let client = client_without_store(&server);
    let err = client.admin().draw_winner().await.unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("Ya se ha realizado el sorteo"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}
