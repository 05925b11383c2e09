mod common;

use axum::http::StatusCode;
use common::{user_row, TestApp, STORE_API_KEY};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_user_returns_stored_row() {
    let app = TestApp::spawn().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .and(header("apikey", STORE_API_KEY))
        .and(body_json(json!({"username": "alice", "is_admin": false})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([user_row("alice", id)])))
        .expect(1)
        .mount(&app.store)
        .await;

    let response = app
        .client
        .post(format!("{}/users", app.address))
        .json(&json!({"username": "alice"}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::CREATED, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["username"], "alice");
    assert_eq!(body["is_admin"], false);
    assert_eq!(body["id"], json!(id));
}

#[tokio::test]
async fn create_user_with_taken_username_conflicts() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"users_username_key\""
        })))
        .mount(&app.store)
        .await;

    let response = app
        .client
        .post(format!("{}/users", app.address))
        .json(&json!({"username": "alice"}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::CONFLICT, response.status());
}

#[tokio::test]
async fn create_user_rejects_empty_username() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/users", app.address))
        .json(&json!({"username": ""}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());
}

#[tokio::test]
async fn get_user_returns_row() {
    let app = TestApp::spawn().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("username", "eq.alice"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_row("alice", id)])))
        .mount(&app.store)
        .await;

    let response = app
        .client
        .get(format!("{}/users/alice", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["username"], "alice");
    assert_eq!(body["id"], json!(id));
}

#[tokio::test]
async fn get_unknown_user_is_not_found() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&app.store)
        .await;

    let response = app
        .client
        .get(format!("{}/users/ghost", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::NOT_FOUND, response.status());
}
