//! HTTP-level tests for departments, cities, places and figures.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, create_city, create_place, delete_auth, editor_token, get, ouest_id,
    post_json, post_json_auth, put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_departments_are_listed(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/departments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "Artibonite");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn writes_require_a_token(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/departments",
        json!({"name": "Gonâve"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn editor_cannot_delete_a_department(pool: PgPool) {
    let token = editor_token(&pool).await;
    let id = ouest_id(&pool).await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/departments/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin = admin_token(&pool).await;
    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/departments/{id}"),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &format!("/api/v1/departments/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_department_derives_slug_and_rejects_duplicates(pool: PgPool) {
    let token = editor_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/departments",
        json!({"name": "Île de la Gonâve"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["slug"], "ile-de-la-gonave");
    assert_eq!(json["is_published"], true);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/departments",
        json!({"name": "Gonâve again", "slug": "ile-de-la-gonave"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_slug_is_rejected(pool: PgPool) {
    let token = editor_token(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/departments",
        json!({"name": "Somewhere", "slug": "Not A Slug"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unpublished_department_is_hidden_from_public_reads(pool: PgPool) {
    let token = editor_token(&pool).await;
    let id = ouest_id(&pool).await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/departments/{id}"),
        json!({"is_published": false}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["is_published"], false);
    assert_eq!(json["name"], "Ouest", "untouched fields keep their value");

    let response = get(common::build_test_app(pool.clone()), &format!("/api/v1/departments/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool), "/api/v1/departments").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 9);
}

// ---------------------------------------------------------------------------
// Cities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn city_belongs_to_its_department(pool: PgPool) {
    let token = editor_token(&pool).await;
    let city = create_city(&pool, &token, "Pétion-Ville").await;
    assert_eq!(city["slug"], "petion-ville");

    let dept = ouest_id(&pool).await;
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/departments/{dept}/cities"),
    )
    .await;
    let json = body_json(response).await;
    let cities = json["data"].as_array().unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0]["name"], "Pétion-Ville");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn city_with_unknown_department_is_a_bad_reference(pool: PgPool) {
    let token = editor_token(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/cities",
        json!({"department_id": 999999, "name": "Nowhere", "latitude": 18.0, "longitude": -72.0}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn city_coordinates_are_range_checked(pool: PgPool) {
    let token = editor_token(&pool).await;
    let dept = ouest_id(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/cities",
        json!({"department_id": dept, "name": "Offworld", "latitude": 118.0, "longitude": -72.0}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_city_slug_in_same_department_conflicts(pool: PgPool) {
    let token = editor_token(&pool).await;
    create_city(&pool, &token, "Kenscoff").await;

    let dept = ouest_id(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/cities",
        json!({"department_id": dept, "name": "Kenscoff", "latitude": 18.45, "longitude": -72.28}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn places_filter_by_kind_and_city(pool: PgPool) {
    let token = editor_token(&pool).await;
    let city = create_city(&pool, &token, "Jacmel").await;
    let city_id = city["id"].as_i64().unwrap();

    create_place(&pool, &token, json!({"city_id": city_id, "name": "Cyvadier Plage", "kind": "beach"})).await;
    create_place(
        &pool,
        &token,
        json!({"city_id": city_id, "name": "Café Koze", "kind": "restaurant", "price_range": "$$"}),
    )
    .await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/places?kind=restaurant&city_id={city_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let places = json["data"].as_array().unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0]["slug"], "cafe-koze");

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/cities/{city_id}/places"),
    )
    .await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_place_kind_is_rejected(pool: PgPool) {
    let token = editor_token(&pool).await;
    let city = create_city(&pool, &token, "Jacmel").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/places",
        json!({"city_id": city["id"], "name": "Fort", "kind": "castle"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(common::build_test_app(pool), "/api/v1/places?kind=castle").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn place_update_and_delete(pool: PgPool) {
    let token = editor_token(&pool).await;
    let city = create_city(&pool, &token, "Cap-Haïtien").await;
    let place = create_place(
        &pool,
        &token,
        json!({"city_id": city["id"], "name": "Hôtel Roi Christophe", "kind": "hotel", "nightly_rate": 95.0}),
    )
    .await;
    let id = place["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/places/{id}"),
        json!({"rating": 4.5}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["rating"], 4.5);
    assert_eq!(json["nightly_rate"], 95.0);

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/places/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &format!("/api/v1/places/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Figures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn figure_lists_round_trip_through_the_api(pool: PgPool) {
    let token = editor_token(&pool).await;
    let city = create_city(&pool, &token, "Gonaïves").await;
    let city_id = city["id"].as_i64().unwrap();

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/figures",
        json!({
            "city_id": city_id,
            "name": "Jean-Jacques Dessalines",
            "birth_year": 1758,
            "death_year": 1806,
            "quotes": ["Koupe tèt, boule kay"],
            "achievements": ["Declared independence on 1 January 1804"],
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let figure = body_json(response).await;
    assert_eq!(figure["quotes"], json!(["Koupe tèt, boule kay"]));

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/cities/{city_id}/figures"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["achievements"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn figure_death_before_birth_is_rejected(pool: PgPool) {
    let token = editor_token(&pool).await;
    let city = create_city(&pool, &token, "Gonaïves").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/figures",
        json!({"city_id": city["id"], "name": "Backwards", "birth_year": 1800, "death_year": 1750}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Business plans
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn business_plans_are_listed_in_order(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/business-plans").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let slugs: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["basic", "standard", "premium"]);
}
