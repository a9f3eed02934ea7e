use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use rust_passtool::api::configure_app;
use rust_passtool::core::config::Config;

fn test_config() -> Config {
    Config {
        // keep bcrypt cheap in tests
        default_hash_rounds: 4,
        ..Config::default()
    }
}

macro_rules! app {
    () => {
        test::init_service(App::new().configure(configure_app(test_config()))).await
    };
}

macro_rules! post {
    ($app:expr, $uri:expr, $body:expr) => {{
        let req = test::TestRequest::post().uri($uri).set_json($body).to_request();
        let resp = test::call_service(&$app, req).await;
        let status: StatusCode = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn generate_returns_password_strength_and_config() {
    let app = app!();
    let (status, body) = post!(app, "/api/password/generate", json!({
        "length": 20,
        "include_uppercase": true,
        "include_lowercase": true,
        "include_numbers": false,
        "include_special_characters": false
    }));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Password generated successfully.");

    let password = body["data"]["password"].as_str().unwrap();
    assert_eq!(password.chars().count(), 20);
    assert!(password.chars().all(|c| c.is_ascii_alphabetic()));

    let strength = &body["data"]["strength"];
    assert!(strength["score"].as_u64().unwrap() <= 100);
    assert!(["weak", "medium", "strong"].contains(&strength["strength"].as_str().unwrap()));
    assert_eq!(strength["details"]["length"], 20);
    assert_eq!(strength["details"]["has_numbers"], false);

    assert_eq!(body["data"]["config"]["length"], 20);
    assert_eq!(body["data"]["config"]["include_special_characters"], false);
}

#[actix_web::test]
async fn generate_rejects_out_of_range_length() {
    let app = app!();
    for (length, message) in [
        (7, "Password length must be at least 8 characters."),
        (129, "Password length cannot exceed 128 characters."),
    ] {
        let (status, body) = post!(app, "/api/password/generate", json!({
            "length": length,
            "include_uppercase": true,
            "include_lowercase": true,
            "include_numbers": true,
            "include_special_characters": true
        }));

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], message);
        assert!(body["errors"]["length"].is_array());
    }
}

#[actix_web::test]
async fn generate_rejects_policy_without_classes() {
    let app = app!();
    let (status, body) = post!(app, "/api/password/generate", json!({
        "length": 16,
        "include_uppercase": false,
        "include_lowercase": false,
        "include_numbers": false,
        "include_special_characters": false
    }));

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "At least one character type must be selected.");
    assert!(body["errors"]["character_types"].is_array());
}

#[actix_web::test]
async fn generate_requires_every_field() {
    let app = app!();
    let (status, body) = post!(app, "/api/password/generate", json!({ "length": 16 }));

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["include_uppercase"][0], "Uppercase option is required.");
    assert!(body["errors"]["include_special_characters"].is_array());
}

#[actix_web::test]
async fn malformed_json_is_unprocessable() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/password/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["errors"]["body"].is_array());
}

#[actix_web::test]
async fn hash_then_verify_round_trip() {
    let app = app!();
    let (status, body) = post!(app, "/api/password/hash", json!({ "password": "hunter22" }));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["algorithm"], "bcrypt");
    assert_eq!(body["data"]["rounds"], 4);
    let hash = body["data"]["hashed_password"].as_str().unwrap().to_string();
    assert_eq!(hash.len(), 60);
    assert!(hash.starts_with("$2"));

    let (status, body) = post!(app, "/api/password/verify", json!({
        "password": "hunter22",
        "hash": &hash
    }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_valid"], true);
    assert_eq!(body["data"]["password_matched"], true);
    assert_eq!(body["message"], "Password verification successful.");

    let (_, body) = post!(app, "/api/password/verify", json!({
        "password": "hunter23",
        "hash": &hash
    }));
    assert_eq!(body["data"]["is_valid"], false);
    assert_eq!(body["message"], "Password does not match.");
}

#[actix_web::test]
async fn hash_honours_explicit_rounds() {
    let app = app!();
    let (status, body) = post!(app, "/api/password/hash", json!({
        "password": "hunter22",
        "rounds": 5
    }));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["rounds"], 5);
    assert!(body["data"]["hashed_password"].as_str().unwrap().contains("$05$"));
}

#[actix_web::test]
async fn hash_validates_input() {
    let app = app!();

    let (status, body) = post!(app, "/api/password/hash", json!({ "password": "" }));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Password cannot be empty.");

    let (status, body) = post!(app, "/api/password/hash", json!({ "password": "x", "rounds": 3 }));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["rounds"][0], "Rounds must be at least 4.");

    let (status, body) = post!(app, "/api/password/hash", json!({ "password": "x", "rounds": 21 }));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["rounds"][0], "Rounds cannot exceed 20.");

    let (status, body) = post!(app, "/api/password/hash", json!({ "password": "x", "rounds": 5_000_000_000i64 }));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["rounds"][0], "Rounds cannot exceed 20.");

    let (status, body) = post!(app, "/api/password/hash", json!({ "password": "x", "rounds": -1 }));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["rounds"][0], "Rounds must be at least 4.");

    let long = "a".repeat(256);
    let (status, body) = post!(app, "/api/password/hash", json!({ "password": long }));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Password cannot exceed 255 characters.");
}

#[actix_web::test]
async fn verify_with_malformed_hash_is_false_not_error() {
    let app = app!();
    let wrong_prefix = "z".repeat(60);
    for hash in ["", "short", "$2b$10$tooshort", wrong_prefix.as_str()] {
        let (status, body) = post!(app, "/api/password/verify", json!({
            "password": "anything",
            "hash": hash
        }));
        assert_eq!(status, StatusCode::OK, "hash {hash:?}");
        assert_eq!(body["data"]["is_valid"], false);
    }
}

#[actix_web::test]
async fn verify_rejects_hash_with_excessive_cost() {
    let app = app!();
    let (_, body) = post!(app, "/api/password/hash", json!({ "password": "hunter22" }));
    let hash = body["data"]["hashed_password"].as_str().unwrap().replacen("$04$", "$31$", 1);

    let (status, body) = post!(app, "/api/password/verify", json!({
        "password": "hunter22",
        "hash": &hash
    }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_valid"], false);
}

#[actix_web::test]
async fn verify_requires_password_and_hash() {
    let app = app!();
    let (status, body) = post!(app, "/api/password/verify", json!({}));

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["password"][0], "Password is required.");
    assert_eq!(body["errors"]["hash"][0], "Hash is required.");
}

#[actix_web::test]
async fn strength_endpoint_scores_password() {
    let app = app!();
    let (status, body) = post!(app, "/api/password/strength", json!({ "password": "Abcdefgh12!?" }));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["score"], 90);
    assert_eq!(body["data"]["strength"], "strong");
    assert_eq!(body["data"]["details"]["char_types"], 4);
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = app!();
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "ok");
}
