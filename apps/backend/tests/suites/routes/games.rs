//! /api/v1/games handlers.

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body_from_service_response;
use migration::{PINEAPPLE_GAME_ID, RUSTACEAN_GAME_ID};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{assert_json_content_type, assert_request_id};
use crate::support::{create_test_app, seeded_state};

fn game_uri(id: impl std::fmt::Display) -> String {
    format!("/api/v1/games/{id}")
}

#[actix_web::test]
async fn test_list_games_returns_seeded_games() {
    let app = create_test_app(seeded_state().await).build().await;

    for uri in ["/api/v1/games", "/api/v1/games/"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
        assert_request_id(&resp);
        assert_json_content_type(&resp);

        let body: Value = test::read_body_json(resp).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&PINEAPPLE_GAME_ID.to_string().as_str()));
        assert!(ids.contains(&RUSTACEAN_GAME_ID.to_string().as_str()));
    }
}

#[actix_web::test]
async fn test_get_game_by_id() {
    let app = create_test_app(seeded_state().await).build().await;

    let req = test::TestRequest::get()
        .uri(&game_uri(PINEAPPLE_GAME_ID))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], PINEAPPLE_GAME_ID.to_string());
    assert_eq!(body["word"], "pineapple");
    assert_eq!(body["wordLength"], "9");
    assert_eq!(body["lettersGuessed"], "");
    assert_eq!(body["lettersMatched"], "_________");
    assert_eq!(body["remainingGuesses"], 6);
    assert_eq!(body["state"], "started");
    assert!(body["createdOn"].is_string());
    assert!(body["updatedOn"].is_string());
}

#[actix_web::test]
async fn test_get_unknown_game_is_404() {
    let app = create_test_app(seeded_state().await).build().await;
    let id = Uuid::new_v4();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&game_uri(id)).to_request(),
    )
    .await;

    let expected = format!("No game with ID {id} exists.");
    assert_error_body_from_service_response(
        resp,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some(&expected),
    )
    .await;
}

#[actix_web::test]
async fn test_get_non_uuid_id_is_404() {
    let app = create_test_app(seeded_state().await).build().await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&game_uri("banana")).to_request(),
    )
    .await;

    assert_error_body_from_service_response(
        resp,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("No game with ID banana exists."),
    )
    .await;
}

#[actix_web::test]
async fn test_create_game_with_word() {
    let app = create_test_app(seeded_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/games")
        .set_json(json!({ "word": "ferris" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["word"], "ferris");
    assert_eq!(body["wordLength"], "6");
    assert_eq!(body["lettersMatched"], "______");
    assert_eq!(body["remainingGuesses"], 6);
    assert_eq!(body["state"], "started");
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/games").to_request(),
    )
    .await;
    let list: Value = test::read_body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_create_game_without_body_picks_a_word() {
    let app = create_test_app(seeded_state().await).build().await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/v1/games").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let word = body["word"].as_str().unwrap();
    assert!(!word.is_empty());
    assert_eq!(body["wordLength"], word.len().to_string());
}

#[actix_web::test]
async fn test_create_game_with_empty_object_picks_a_word() {
    let app = create_test_app(seeded_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/games")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_create_game_rejects_invalid_word() {
    let app = create_test_app(seeded_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/games")
        .set_json(json!({ "word": "hello world" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body_from_service_response(
        resp,
        "INVALID_WORD",
        StatusCode::BAD_REQUEST,
        Some("A word must contain only letters"),
    )
    .await;
}

#[actix_web::test]
async fn test_create_game_rejects_malformed_json() {
    let app = create_test_app(seeded_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/games")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"word\":")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body_from_service_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None)
        .await;
}

#[actix_web::test]
async fn test_guess_reveals_letters() {
    let app = create_test_app(seeded_state().await).build().await;

    let req = test::TestRequest::put()
        .uri(&game_uri(PINEAPPLE_GAME_ID))
        .set_json(json!({ "letter": "p" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["lettersGuessed"], "p");
    assert_eq!(body["lettersMatched"], "p____pp__");
    assert_eq!(body["remainingGuesses"], 6);
    assert_eq!(body["state"], "started");
}

#[actix_web::test]
async fn test_guess_accepts_letters_guessed_alias() {
    let app = create_test_app(seeded_state().await).build().await;

    let req = test::TestRequest::put()
        .uri(&game_uri(PINEAPPLE_GAME_ID))
        .set_json(json!({ "lettersGuessed": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["lettersGuessed"], "x");
    assert_eq!(body["remainingGuesses"], 5);
}

#[actix_web::test]
async fn test_pineapple_win_over_http() {
    let app = create_test_app(seeded_state().await).build().await;
    let uri = game_uri(PINEAPPLE_GAME_ID);

    let mut last = Value::Null;
    for letter in ["p", "i", "n", "e", "a", "l"] {
        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "letter": letter }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "guess {letter}");
        last = test::read_body_json(resp).await;
    }

    assert_eq!(last["lettersMatched"], "pineapple");
    assert_eq!(last["state"], "won");

    // A finished game takes no more guesses.
    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "letter": "z" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let expected = format!("Game {PINEAPPLE_GAME_ID} is already won.");
    assert_error_body_from_service_response(
        resp,
        "GAME_OVER",
        StatusCode::CONFLICT,
        Some(&expected),
    )
    .await;
}

#[actix_web::test]
async fn test_invalid_guesses_are_400() {
    let app = create_test_app(seeded_state().await).build().await;

    for body in [json!({ "letter": "ab" }), json!({ "letter": "1" }), json!({})] {
        let req = test::TestRequest::put()
            .uri(&game_uri(PINEAPPLE_GAME_ID))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_body_from_service_response(
            resp,
            "INVALID_GUESS",
            StatusCode::BAD_REQUEST,
            Some("A guess must be a single letter"),
        )
        .await;
    }
}

#[actix_web::test]
async fn test_guess_on_unknown_game_is_404() {
    let app = create_test_app(seeded_state().await).build().await;
    let id = Uuid::new_v4();

    let req = test::TestRequest::put()
        .uri(&game_uri(id))
        .set_json(json!({ "letter": "a" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let expected = format!("No game with ID {id} exists.");
    assert_error_body_from_service_response(
        resp,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some(&expected),
    )
    .await;
}

#[actix_web::test]
async fn test_delete_game_is_idempotent() {
    let app = create_test_app(seeded_state().await).build().await;
    let uri = game_uri(RUSTACEAN_GAME_ID);

    for _ in 0..2 {
        let resp =
            test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_request_id(&resp);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&game_uri("not-a-uuid"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
