//! `/api/v1/dev/*` is only mounted when enabled in config.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn dev_routes_are_absent_by_default(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/dev/counts").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dev_counts_report_seeded_rows(pool: PgPool) {
    let mut config = common::test_config(&std::env::temp_dir().join("ayiti-api-tests"));
    config.expose_dev_routes = true;

    let response = get(common::build_app_with_config(pool, config), "/api/v1/dev/counts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let counts = json["data"].as_array().unwrap();
    let departments = counts
        .iter()
        .find(|c| c["table"] == "departments")
        .expect("departments count present");
    assert_eq!(departments["rows"], 10);
}
