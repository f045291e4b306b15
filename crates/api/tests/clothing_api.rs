//! HTTP-level tests for the closet: clothing items and favorites.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, put_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;
use wardrobe_db::models::user::CreateUser;
use wardrobe_db::repositories::UserRepo;

async fn user_token(pool: &PgPool, username: &str) -> String {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "unused".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");
    common::token_for(user.id, username)
}

async fn create_item(pool: &PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/clothing", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Validation and auth (no database required)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_requires_auth() {
    let app = common::build_test_app(common::lazy_pool());
    let response = get(app, "/api/v1/clothing").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let app = common::build_test_app(common::lazy_pool());
    let token = common::token_for(1, "sam");
    let body = json!({ "name": "Cape", "category": "Capes" });
    let response = post_json_auth(app, "/api/v1/clothing", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let app = common::build_test_app(common::lazy_pool());
    let token = common::token_for(1, "sam");
    let body = json!({ "name": "", "category": "Tops" });
    let response = post_json_auth(app, "/api/v1/clothing", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let app = common::build_test_app(common::lazy_pool());
    let token = common::token_for(1, "sam");
    let response = get_auth(app, "/api/v1/clothing/shirt", &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Database-backed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn item_crud_round_trip(pool: PgPool) {
    let token = user_token(&pool, "crud").await;
    let item = create_item(
        &pool,
        &token,
        json!({ "name": "Oxford shirt", "category": "Tops", "color": "white", "style": "formal" }),
    )
    .await;
    let id = item["id"].as_i64().unwrap();
    assert_eq!(item["category"], "Tops");
    assert!(item["season"].is_null());

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/clothing/{id}"),
        json!({ "season": "Summer" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["season"], "Summer");
    assert_eq!(updated["color"], "white");

    let uri = format!("/api/v1/clothing/{id}");
    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(common::build_test_app(pool), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_category(pool: PgPool) {
    let token = user_token(&pool, "filter").await;
    create_item(&pool, &token, json!({ "name": "Tee", "category": "Tops" })).await;
    create_item(&pool, &token, json!({ "name": "Jeans", "category": "Bottoms" })).await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/clothing?category=Bottoms",
        &token,
    )
    .await;
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Jeans");

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/clothing?category=Capes",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_users_items_are_invisible(pool: PgPool) {
    let owner = user_token(&pool, "owner").await;
    let intruder = user_token(&pool, "intruder").await;
    let item = create_item(&pool, &owner, json!({ "name": "Boots", "category": "Shoes" })).await;
    let uri = format!("/api/v1/clothing/{}", item["id"]);

    let response = get_auth(common::build_test_app(pool.clone()), &uri, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(common::build_test_app(pool), &uri, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn favorites_flow(pool: PgPool) {
    let token = user_token(&pool, "fan").await;
    let item = create_item(&pool, &token, json!({ "name": "Scarf", "category": "Accessories" })).await;
    let uri = format!("/api/v1/favorites/{}", item["id"]);

    for _ in 0..2 {
        let response = put_auth(common::build_test_app(pool.clone()), &uri, &token).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = get_auth(common::build_test_app(pool.clone()), "/api/v1/favorites", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_auth(common::build_test_app(pool), "/api/v1/favorites/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn recategorizing_an_item_in_a_saved_outfit_conflicts(pool: PgPool) {
    let token = user_token(&pool, "stylist").await;
    let top = create_item(&pool, &token, json!({ "name": "Tee", "category": "Tops" })).await;
    let bottom = create_item(&pool, &token, json!({ "name": "Jeans", "category": "Bottoms" })).await;
    let shoes = create_item(&pool, &token, json!({ "name": "Boots", "category": "Shoes" })).await;
    let spare = create_item(&pool, &token, json!({ "name": "Polo", "category": "Tops" })).await;

    let selection = json!({
        "top_id": top["id"], "bottom_id": bottom["id"], "shoes_id": shoes["id"],
        "occasion": "Work", "weather": "Any",
    });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/outfits/saved", selection, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let top_uri = format!("/api/v1/clothing/{}", top["id"]);
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &top_uri, json!({ "category": "Shoes" }), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The stored item keeps its category.
    let response = get_auth(common::build_test_app(pool.clone()), &top_uri, &token).await;
    assert_eq!(body_json(response).await["data"]["category"], "Tops");

    // Restating the current category, or recategorizing an unused item, is fine.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &top_uri, json!({ "category": "Tops" }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let spare_uri = format!("/api/v1/clothing/{}", spare["id"]);
    let app = common::build_test_app(pool);
    let response = put_json_auth(app, &spare_uri, json!({ "category": "Dresses" }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_string_clears_a_tag(pool: PgPool) {
    let token = user_token(&pool, "minimalist").await;
    let item = create_item(
        &pool,
        &token,
        json!({ "name": "Scarf", "category": "Accessories", "color": "red", "season": "Winter" }),
    )
    .await;

    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/clothing/{}", item["id"]);
    let response = put_json_auth(app, &uri, json!({ "color": "" }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await["data"].clone();
    assert!(updated["color"].is_null());
    assert_eq!(updated["season"], "Winter");
}
