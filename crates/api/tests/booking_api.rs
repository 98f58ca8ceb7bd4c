//! Booking quotes over the API and the place page calculator.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, create_city, create_place, editor_token, get, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn hotel(pool: &PgPool) -> i64 {
    let token = editor_token(pool).await;
    let city = create_city(pool, &token, "Jacmel").await;
    let place = create_place(
        pool,
        &token,
        json!({
            "city_id": city["id"],
            "name": "Hôtel Florita",
            "kind": "hotel",
            "nightly_rate": 120.0,
            "max_guests": 4,
        }),
    )
    .await;
    place["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quote_adds_service_fee_and_taxes(pool: PgPool) {
    let id = hotel(&pool).await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/places/{id}/booking-quote"),
        json!({"check_in": "2026-12-20", "check_out": "2026-12-23", "guests": 2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let quote = &body_json(response).await["data"];
    assert_eq!(quote["nights"], 3);
    assert_eq!(quote["subtotal"], 360.0);
    assert_eq!(quote["service_fee"], 54.0);
    assert_eq!(quote["taxes"], 36.0);
    assert_eq!(quote["total"], 450.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quote_rejects_bad_dates_and_large_parties(pool: PgPool) {
    let id = hotel(&pool).await;
    let uri = format!("/api/v1/places/{id}/booking-quote");

    let response = post_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({"check_in": "2026-12-23", "check_out": "2026-12-23"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool),
        &uri,
        json!({"check_in": "2026-12-20", "check_out": "2026-12-21", "guests": 9}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn place_without_nightly_rate_cannot_be_quoted(pool: PgPool) {
    let token = editor_token(&pool).await;
    let city = create_city(&pool, &token, "Jacmel").await;
    let beach = create_place(
        &pool,
        &token,
        json!({"city_id": city["id"], "name": "Raymond-les-Bains", "kind": "beach"}),
    )
    .await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/places/{}/booking-quote", beach["id"]),
        json!({"check_in": "2026-12-20", "check_out": "2026-12-21"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn place_page_renders_quote_table(pool: PgPool) {
    let id = hotel(&pool).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/places/{id}?check_in=2026-12-20&check_out=2026-12-23&guests=2"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("$120.00 per night"));
    assert!(html.contains("$450.00"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn place_page_shows_validation_message_for_bad_dates(pool: PgPool) {
    let id = hotel(&pool).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/places/{id}?check_in=2026-12-23&check_out=2026-12-20"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Check-out date must be after check-in date"));
}
