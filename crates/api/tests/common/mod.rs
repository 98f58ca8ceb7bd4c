#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use ayiti_api::auth::jwt::{generate_access_token, JwtConfig};
use ayiti_api::auth::password::hash_password;
use ayiti_api::config::ServerConfig;
use ayiti_api::routes;
use ayiti_api::state::AppState;
use ayiti_db::models::user::CreateUser;
use ayiti_db::repositories::UserRepo;

pub const TEST_ORIGIN: &str = "http://localhost:3000";
pub const TEST_JWT_SECRET: &str = "test-secret-not-for-production";
pub const TEST_MAX_UPLOAD_BYTES: usize = 64 * 1024;

/// Build a test `ServerConfig` storing uploads under `upload_dir`.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.to_path_buf(),
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        expose_dev_routes: false,
        db_connect_attempts: 1,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Full application with the default test config. Uploads go to a shared
/// temp path that tests without photos never write to.
pub fn build_test_app(pool: PgPool) -> Router {
    let upload_dir = std::env::temp_dir().join("ayiti-api-tests");
    build_app_with_config(pool, test_config(&upload_dir))
}

/// Build the full application router with all middleware layers.
///
/// Mirrors `main.rs` so integration tests exercise the same stack
/// (CORS, request ID, timeout, tracing, compression, panic recovery).
pub fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let app = routes::app_routes(&config);
    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin([TEST_ORIGIN.parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    app.layer(CompressionLayer::new())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Users and tokens
// ---------------------------------------------------------------------------

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Insert a user with [`TEST_PASSWORD`] and return a bearer token for it.
pub async fn create_user_token(pool: &PgPool, email: &str, role: &str) -> String {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    let jwt = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 60,
    };
    generate_access_token(user.id, &user.role, &jwt).expect("token generation should succeed")
}

pub async fn editor_token(pool: &PgPool) -> String {
    create_user_token(pool, "editor@test.ht", "editor").await
}

pub async fn admin_token(pool: &PgPool) -> String {
    create_user_token(pool, "admin@test.ht", "admin").await
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, body, None)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::POST, uri, body, Some(token))).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::PUT, uri, body, Some(token))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a hand-built request (multipart uploads, custom headers).
pub async fn send_request(app: Router, request: Request<Body>) -> Response {
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("response body should be JSON")
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("response body should be UTF-8")
}

// ---------------------------------------------------------------------------
// Content fixtures
// ---------------------------------------------------------------------------

/// Id of the seeded `ouest` department.
pub async fn ouest_id(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT id FROM departments WHERE slug = 'ouest'")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Create a city in Ouest through the API and return its JSON.
pub async fn create_city(pool: &PgPool, token: &str, name: &str) -> serde_json::Value {
    let department_id = ouest_id(pool).await;
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/cities",
        serde_json::json!({
            "department_id": department_id,
            "name": name,
            "latitude": 18.51,
            "longitude": -72.29,
        }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Create a place through the API and return its JSON.
pub async fn create_place(
    pool: &PgPool,
    token: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/places", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
