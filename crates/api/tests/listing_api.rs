//! Multi-step listing form: per-step validation and final submission.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_city, editor_token, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

fn complete_draft(city_id: &Value) -> Value {
    json!({
        "title": "Villa on the bay",
        "property_type": "villa",
        "description": "Three bedrooms above the bay with a view of the Citadelle.",
        "city_id": city_id,
        "address": "Route de Labadie",
        "bedrooms": 3,
        "bathrooms": 2,
        "max_guests": 6,
        "amenities": ["wifi", "generator"],
        "nightly_rate": 150.0,
        "host_name": "Marie",
        "contact_email": "marie@example.ht",
        "accept_terms": true,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_step_reports_missing_title(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/listings/validate",
        json!({"step": 1, "draft": {}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"]
        .as_str()
        .unwrap()
        .contains("title"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn valid_step_advances_to_the_next(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/listings/validate",
        json!({"step": 1, "draft": complete_draft(&json!(1))}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["next_step"], 2);
    assert!(json["data"]["next_label"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn going_back_skips_validation_and_jumps_are_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/listings/validate",
        json!({"step": 3, "target": 2, "draft": {}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["next_step"], 2);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/listings/validate",
        json!({"step": 1, "target": 4, "draft": {}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn final_step_has_no_successor(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/listings/validate",
        json!({"step": 6, "draft": {"accept_terms": true}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["next_step"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn complete_listing_is_stored_as_pending(pool: PgPool) {
    let token = editor_token(&pool).await;
    let city = create_city(&pool, &token, "Cap-Haïtien").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/listings",
        complete_draft(&city["id"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["minimum_nights"], 1);
    assert_eq!(json["amenities"], json!(["wifi", "generator"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_without_terms_or_with_unknown_city_is_rejected(pool: PgPool) {
    let token = editor_token(&pool).await;
    let city = create_city(&pool, &token, "Cap-Haïtien").await;

    let mut draft = complete_draft(&city["id"]);
    draft["accept_terms"] = json!(false);
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/listings", draft).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/listings",
        complete_draft(&json!(999_999)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
