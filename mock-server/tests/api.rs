use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, ACCESS_TOKEN};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn authed(method: &str, uri: &str) -> http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, format!("Bearer {ACCESS_TOKEN}"))
}

fn get_json(uri: &str) -> Request<Body> {
    authed("GET", uri)
        .header(http::header::ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    authed("POST", uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_token_returns_401_error_document() {
    let app = app();
    let resp = send(
        &app,
        Request::builder()
            .uri("/v1/items/names/1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["type"], "errors");
    assert_eq!(body["data"]["id"], "error_access_tokens_unauthorized");
}

#[tokio::test]
async fn unknown_token_returns_401() {
    let app = app();
    let resp = send(
        &app,
        Request::builder()
            .uri("/v1/roms")
            .header(http::header::AUTHORIZATION, "Bearer nope")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- reads ---

#[tokio::test]
async fn get_single_returns_envelope() {
    let app = app();
    let resp = send(&app, get_json("/v1/items/names/1")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["type"], "item_names");
    assert_eq!(body["data"]["attributes"], json!({"name": "MASTER BALL"}));
    assert_eq!(
        body["links"]["self"],
        "https://api.pkmnapi.com/v1/items/names/1"
    );
}

#[tokio::test]
async fn get_collection_lists_every_record() {
    let app = app();
    let resp = send(&app, get_json("/v1/types/names")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    assert!(data.iter().all(|object| object["type"] == "type_names"));
}

#[tokio::test]
async fn get_unknown_id_returns_404_error_document() {
    let app = app();
    let resp = send(&app, get_json("/v1/items/names/200")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["id"], "error_not_found");
    assert_eq!(
        body["data"]["attributes"]["message"],
        "Invalid item_names ID 200"
    );
}

#[tokio::test]
async fn evolutions_embed_target_objects() {
    let app = app();
    let resp = send(&app, get_json("/v1/pokemon/evolutions/35")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let evolution = &body["data"]["attributes"]["evolutions"][0];
    assert_eq!(evolution["evolution_type"], "item");
    assert_eq!(evolution["item"]["attributes"]["name"], "MOON STONE");
    assert_eq!(evolution["pokemon"]["attributes"]["name"], "CLEFABLE");
}

// --- writes ---

#[tokio::test]
async fn post_then_get_reflects_write() {
    let app = app();
    let resp = send(
        &app,
        post_json(
            "/v1/items/names/1",
            json!({"data": {"type": "item_names", "attributes": {"name": "FOO"}}}),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    assert_eq!(body_json(resp).await, json!({}));

    let resp = send(&app, get_json("/v1/items/names/1")).await;
    let body = body_json(resp).await;
    assert_eq!(body["data"]["attributes"]["name"], "FOO");

    let resp = send(&app, get_json("/v1/roms/patches")).await;
    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["type"], "rom_patches");
}

#[tokio::test]
async fn post_with_wrong_type_returns_400() {
    let app = app();
    let resp = send(
        &app,
        post_json(
            "/v1/items/names/1",
            json!({"data": {"type": "move_names", "attributes": {"name": "FOO"}}}),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["type"], "errors");
}

#[tokio::test]
async fn post_with_dangling_reference_returns_400() {
    let app = app();
    let resp = send(
        &app,
        post_json(
            "/v1/trades/0",
            json!({
                "data": {
                    "type": "trades",
                    "attributes": {"give": {"id": "999"}, "get": {"id": "2"}, "nickname": "X"}
                }
            }),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn read_only_table_rejects_post() {
    let app = app();
    let resp = send(
        &app,
        post_json(
            "/v1/tms/names/1",
            json!({"data": {"type": "tm_names", "attributes": {"name": "TM99"}}}),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn mart_write_expands_tm_names_to_tm_moves() {
    let app = app();
    let resp = send(
        &app,
        post_json(
            "/v1/marts/items/1",
            json!({
                "data": {
                    "type": "mart_items",
                    "attributes": {"mart_items": [{"id": "3", "type": "tm_names"}]}
                }
            }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let body = body_json(send(&app, get_json("/v1/marts/items/1")).await).await;
    let entry = &body["data"]["attributes"]["mart_items"][0];
    assert_eq!(entry["type"], "tm_moves");
    assert_eq!(entry["attributes"]["move"]["attributes"]["name"], "BODY SLAM");
}

// --- media ---

#[tokio::test]
async fn icon_is_served_as_gif() {
    let app = app();
    let resp = send(
        &app,
        authed("GET", "/v1/icons/7")
            .header(http::header::ACCEPT, "image/gif")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[http::header::CONTENT_TYPE], "image/gif");
    let bytes = body_bytes(resp).await;
    assert!(bytes.starts_with(b"GIF89a"));
}

#[tokio::test]
async fn media_with_wrong_accept_returns_406() {
    let app = app();
    let resp = send(
        &app,
        authed("GET", "/v1/icons/7")
            .header(http::header::ACCEPT, "image/png")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn cry_negotiates_json_or_wav() {
    let app = app();
    let resp = send(&app, get_json("/v1/pokemon/cries/1")).await;
    assert_eq!(body_json(resp).await["data"]["type"], "pokemon_cries");

    let resp = send(
        &app,
        authed("GET", "/v1/pokemon/cries/1")
            .header(http::header::ACCEPT, "audio/wav")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.starts_with(b"RIFF"));
}

#[tokio::test]
async fn logo_upload_replaces_bytes() {
    let app = app();
    let resp = send(
        &app,
        authed("POST", "/v1/imgs/pokemon_logo")
            .header(http::header::CONTENT_TYPE, "image/png")
            .body(Body::from(vec![1u8, 2, 3]))
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let resp = send(
        &app,
        authed("GET", "/v1/imgs/pokemon_logo")
            .header(http::header::ACCEPT, "image/png")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(body_bytes(resp).await.as_ref(), &[1u8, 2, 3]);
}

// --- access tokens ---

#[tokio::test]
async fn access_token_create_and_delete() {
    let app = app();
    let resp = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/v1/access_tokens")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"data": {"type": "access_tokens", "attributes": {"email_address": "foo@bar.com"}}})
                    .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/v1/access_tokens")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"source": {"code": "wrong", "email_address": "foo@bar.com"}}).to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(resp).await["data"]["id"],
        "error_access_tokens_forbidden"
    );
}

#[tokio::test]
async fn access_token_rejects_invalid_email() {
    let app = app();
    let resp = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/v1/access_tokens")
            .body(Body::from(
                json!({"data": {"type": "access_tokens", "attributes": {"email_address": "nope"}}})
                    .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- storage ---

#[tokio::test]
async fn rom_upload_get_delete() {
    let app = app();
    let resp = send(
        &app,
        authed("POST", "/v1/roms")
            .header(http::header::CONTENT_TYPE, "application/octet-stream")
            .body(Body::from(vec![0u8; 16]))
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["data"]["type"], "roms");

    let resp = send(
        &app,
        authed("DELETE", "/v1/roms").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = send(&app, get_json("/v1/roms")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
