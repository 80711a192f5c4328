//! In-memory fake of the pkmnapi service.
//!
//! Serves seeded game data under `/v1` in the same JSON:API-style envelopes
//! as the real service, accepts writes, and answers failures with the
//! service's `{"data": {"id", "type": "errors", "attributes": {"message"}}}`
//! document. Everything except the access-token routes requires
//! `Authorization: Bearer {token}`.

pub mod store;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    http::{header, HeaderMap, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub use store::{Store, Table, ACCESS_TOKEN, TABLES};
use store::{resource_object, Blob, Rejection, Rom, LINK_BASE};

pub type Db = Arc<RwLock<Store>>;

type Reply = Result<Response, Response>;

const JSON: &str = "application/json";

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));

    let mut protected = Router::new();
    for table in TABLES {
        let list = move |State(db): State<Db>| list_records(db, table);
        let read = move |State(db): State<Db>, Path(id): Path<String>, headers: HeaderMap| {
            read_record(db, table, id, headers)
        };
        let mut one = get(read);
        if table.writable {
            let write = move |State(db): State<Db>, Path(id): Path<String>, body: Bytes| {
                write_record(db, table, id, body)
            };
            one = one.post(write);
        }
        protected = protected
            .route(&format!("/v1/{}", table.route), get(list))
            .route(&format!("/v1/{}/{{id}}", table.route), one);
    }

    let protected = protected
        .route("/v1/icons/{id}", get(read_blob))
        .route("/v1/imgs/{name}", get(read_blob).post(write_blob))
        .route("/v1/maps/pics/{id}", get(read_blob))
        .route("/v1/pokemon/pics/{id}", get(read_blob).post(write_blob))
        .route("/v1/trainers/pics/{id}", get(read_blob).post(write_blob))
        .route("/v1/player_names", get(get_player_names).post(post_player_names))
        .route("/v1/roms", get(get_rom).post(post_rom).delete(delete_rom))
        .route("/v1/roms/patches", get(list_rom_patches))
        .route("/v1/roms/patches/{id}", get(get_rom_patch).delete(delete_rom_patch))
        .route("/v1/savs", get(get_sav).post(post_sav).delete(delete_sav))
        .route(
            "/v1/savs/player_names",
            get(get_sav_player_name).post(post_sav_player_name),
        )
        .route_layer(middleware::from_fn_with_state(db.clone(), require_token));

    Router::new()
        .route("/v1/access_tokens", post(post_access_token).delete(delete_access_token))
        .route("/v1/access_tokens/delete", post(post_access_token_delete))
        .merge(protected)
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The service's error document.
pub fn error_body(id: &str, message: &str) -> Value {
    json!({"data": {"id": id, "type": "errors", "attributes": {"message": message}}})
}

fn error(status: StatusCode, id: &str, message: impl AsRef<str>) -> Response {
    (status, Json(error_body(id, message.as_ref()))).into_response()
}

fn not_found(message: impl AsRef<str>) -> Response {
    error(StatusCode::NOT_FOUND, "error_not_found", message)
}

fn bad_request(message: impl AsRef<str>) -> Response {
    error(StatusCode::BAD_REQUEST, "error_bad_request", message)
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        match self {
            Rejection::BadRequest(message) => bad_request(message),
            Rejection::NotFound(message) => not_found(message),
        }
    }
}

fn accepted() -> Response {
    (StatusCode::ACCEPTED, Json(json!({}))).into_response()
}

fn single(object: Value) -> Response {
    let links = object["links"].clone();
    Json(json!({"data": object, "links": links})).into_response()
}

fn collection(route: &str, objects: Vec<Value>) -> Response {
    Json(json!({"data": objects, "links": {"self": format!("{LINK_BASE}/{route}")}})).into_response()
}

async fn require_token(State(db): State<Db>, request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned);
    let authorized = match token {
        Some(token) => db.read().await.tokens.contains(&token),
        None => false,
    };
    if !authorized {
        tracing::warn!(uri = %request.uri(), "rejecting unauthenticated request");
        return error(
            StatusCode::UNAUTHORIZED,
            "error_access_tokens_unauthorized",
            "Authorization header must be set",
        );
    }
    next.run(request).await
}

/// The JSON attributes of an enveloped write, checked against `resource_type`.
fn envelope_attributes(body: &[u8], resource_type: &str) -> Result<Value, Response> {
    let envelope: Value =
        serde_json::from_slice(body).map_err(|e| bad_request(format!("Invalid JSON body: {e}")))?;
    let found = envelope.pointer("/data/type").and_then(Value::as_str);
    if found != Some(resource_type) {
        return Err(bad_request(format!(
            "Invalid type {}, expected {resource_type}",
            found.unwrap_or("null")
        )));
    }
    envelope
        .pointer("/data/attributes")
        .cloned()
        .ok_or_else(|| bad_request("Missing attributes"))
}

fn parse_id(table: &Table, id: &str) -> Result<u32, Response> {
    id.parse()
        .map_err(|_| not_found(format!("Invalid {} ID {id}", table.resource_type)))
}

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map_or(true, |value| value.contains(JSON) || value.contains("*/*"))
}

fn blob_response(blob: &Blob, headers: &HeaderMap) -> Response {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if accept != blob.content_type {
        return error(
            StatusCode::NOT_ACCEPTABLE,
            "error_not_acceptable",
            format!("Unsupported Accept header {accept:?}, expected {}", blob.content_type),
        );
    }
    (
        [(header::CONTENT_TYPE, blob.content_type.clone())],
        blob.bytes.clone(),
    )
        .into_response()
}

async fn list_records(db: Db, table: &'static Table) -> Response {
    let store = db.read().await;
    let objects = store
        .table(table.route)
        .map(|records| {
            records
                .iter()
                .map(|(id, attributes)| {
                    resource_object(table.resource_type, table.route, id, attributes.clone())
                })
                .collect()
        })
        .unwrap_or_default();
    collection(table.route, objects)
}

async fn read_record(db: Db, table: &'static Table, id: String, headers: HeaderMap) -> Reply {
    let store = db.read().await;
    if !accepts_json(&headers) {
        let key = format!("{}/{id}", table.route);
        let blob = store
            .blobs
            .get(&key)
            .ok_or_else(|| not_found(format!("No media at {key}")))?;
        return Ok(blob_response(blob, &headers));
    }
    let numeric = parse_id(table, &id)?;
    let attributes = store
        .table(table.route)
        .and_then(|records| records.get(&numeric))
        .ok_or_else(|| not_found(format!("Invalid {} ID {id}", table.resource_type)))?;
    Ok(single(resource_object(
        table.resource_type,
        table.route,
        &id,
        attributes.clone(),
    )))
}

async fn write_record(db: Db, table: &'static Table, id: String, body: Bytes) -> Reply {
    let numeric = parse_id(table, &id)?;
    let attributes = envelope_attributes(&body, table.resource_type)?;
    let mut store = db.write().await;
    if !store
        .table(table.route)
        .is_some_and(|records| records.contains_key(&numeric))
    {
        return Err(not_found(format!("Invalid {} ID {id}", table.resource_type)));
    }
    store
        .write(table, numeric, attributes)
        .map_err(IntoResponse::into_response)?;
    tracing::info!(route = table.route, id = numeric, "record updated");
    Ok(accepted())
}

fn blob_key(uri: &Uri) -> String {
    uri.path().trim_start_matches("/v1/").to_string()
}

async fn read_blob(State(db): State<Db>, uri: Uri, headers: HeaderMap) -> Reply {
    let key = blob_key(&uri);
    let store = db.read().await;
    let blob = store
        .blobs
        .get(&key)
        .ok_or_else(|| not_found(format!("No media at {key}")))?;
    Ok(blob_response(blob, &headers))
}

async fn write_blob(State(db): State<Db>, uri: Uri, headers: HeaderMap, body: Bytes) -> Reply {
    let key = blob_key(&uri);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| bad_request("Missing Content-Type"))?
        .to_string();
    let mut store = db.write().await;
    let blob = store
        .blobs
        .get_mut(&key)
        .ok_or_else(|| not_found(format!("No media at {key}")))?;
    if blob.content_type != content_type {
        return Err(error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "error_unsupported_media_type",
            format!("Expected {}", blob.content_type),
        ));
    }
    blob.bytes = body.to_vec();
    store.record_patch(format!("media {key}"));
    Ok(accepted())
}

async fn get_player_names(State(db): State<Db>) -> Response {
    let store = db.read().await;
    single(resource_object("player_names", "player_names", 1, store.player_names.clone()))
}

async fn post_player_names(State(db): State<Db>, body: Bytes) -> Reply {
    let attributes = envelope_attributes(&body, "player_names")?;
    let mut store = db.write().await;
    store.player_names = attributes;
    store.record_patch("player_names".to_string());
    Ok(accepted())
}

fn rom_object(rom: &Rom) -> Value {
    json!({
        "id": rom.hash,
        "type": "roms",
        "attributes": {"name": rom.name, "hash": rom.hash, "valid": true},
        "links": {"self": format!("{LINK_BASE}/roms")}
    })
}

async fn get_rom(State(db): State<Db>) -> Reply {
    let store = db.read().await;
    let rom = store.rom.as_ref().ok_or_else(|| not_found("No ROM uploaded"))?;
    Ok(single(rom_object(rom)))
}

async fn post_rom(State(db): State<Db>, body: Bytes) -> Reply {
    if body.is_empty() {
        return Err(bad_request("Invalid ROM provided"));
    }
    let rom = Rom {
        name: "UPLOADED ROM".to_string(),
        hash: Uuid::new_v4().simple().to_string(),
    };
    let object = rom_object(&rom);
    let mut store = db.write().await;
    store.rom = Some(rom);
    store.rom_patches.clear();
    Ok((StatusCode::CREATED, single(object)).into_response())
}

async fn delete_rom(State(db): State<Db>) -> Reply {
    let mut store = db.write().await;
    store.rom.take().ok_or_else(|| not_found("No ROM uploaded"))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn list_rom_patches(State(db): State<Db>) -> Response {
    let store = db.read().await;
    let objects = store
        .rom_patches
        .iter()
        .map(|(id, attributes)| resource_object("rom_patches", "roms/patches", id, attributes.clone()))
        .collect();
    collection("roms/patches", objects)
}

async fn get_rom_patch(State(db): State<Db>, Path(id): Path<String>) -> Reply {
    let store = db.read().await;
    let attributes = store
        .rom_patches
        .get(&id)
        .ok_or_else(|| not_found(format!("Invalid patch ID {id}")))?;
    Ok(single(resource_object("rom_patches", "roms/patches", &id, attributes.clone())))
}

async fn delete_rom_patch(State(db): State<Db>, Path(id): Path<String>) -> Reply {
    let mut store = db.write().await;
    store
        .rom_patches
        .remove(&id)
        .ok_or_else(|| not_found(format!("Invalid patch ID {id}")))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

fn sav_object() -> Value {
    json!({
        "id": "1",
        "type": "savs",
        "attributes": {},
        "links": {"self": format!("{LINK_BASE}/savs")}
    })
}

async fn get_sav(State(db): State<Db>) -> Reply {
    if !db.read().await.sav {
        return Err(not_found("No SAV uploaded"));
    }
    Ok(single(sav_object()))
}

async fn post_sav(State(db): State<Db>, body: Bytes) -> Reply {
    if body.is_empty() {
        return Err(bad_request("Invalid SAV provided"));
    }
    db.write().await.sav = true;
    let object = sav_object();
    Ok((StatusCode::CREATED, single(object)).into_response())
}

async fn delete_sav(State(db): State<Db>) -> Reply {
    let mut store = db.write().await;
    if !store.sav {
        return Err(not_found("No SAV uploaded"));
    }
    store.sav = false;
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn get_sav_player_name(State(db): State<Db>) -> Reply {
    let store = db.read().await;
    if !store.sav {
        return Err(not_found("No SAV uploaded"));
    }
    Ok(single(resource_object(
        "sav_player_names",
        "savs/player_names",
        1,
        store.sav_player_name.clone(),
    )))
}

async fn post_sav_player_name(State(db): State<Db>, body: Bytes) -> Reply {
    let attributes = envelope_attributes(&body, "sav_player_names")?;
    let mut store = db.write().await;
    if !store.sav {
        return Err(not_found("No SAV uploaded"));
    }
    store.sav_player_name = attributes;
    Ok(accepted())
}

#[derive(Debug, Deserialize)]
pub struct AccessTokenDelete {
    pub code: String,
    pub email_address: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBody<T> {
    pub source: T,
}

fn email_address(body: &[u8]) -> Result<String, Response> {
    let attributes = envelope_attributes(body, "access_tokens")?;
    let email = attributes
        .get("email_address")
        .and_then(Value::as_str)
        .filter(|email| email.contains('@'))
        .ok_or_else(|| bad_request("Invalid email address"))?;
    Ok(email.to_string())
}

async fn post_access_token(State(db): State<Db>, body: Bytes) -> Reply {
    let email = email_address(&body)?;
    let code = Uuid::new_v4().simple().to_string();
    let mut store = db.write().await;
    store.tokens.insert(code.clone());
    store.pending_codes.insert(email, code);
    Ok((StatusCode::CREATED, Json(json!({}))).into_response())
}

async fn post_access_token_delete(State(db): State<Db>, body: Bytes) -> Reply {
    let email = email_address(&body)?;
    let store = db.read().await;
    if !store.pending_codes.contains_key(&email) {
        return Err(not_found(format!("No access token for {email}")));
    }
    Ok(accepted())
}

async fn delete_access_token(State(db): State<Db>, body: Bytes) -> Reply {
    let request: DeleteBody<AccessTokenDelete> =
        serde_json::from_slice(&body).map_err(|e| bad_request(format!("Invalid JSON body: {e}")))?;
    let mut store = db.write().await;
    let matches = store
        .pending_codes
        .get(&request.source.email_address)
        .is_some_and(|code| *code == request.source.code);
    if !matches {
        return Err(error(
            StatusCode::FORBIDDEN,
            "error_access_tokens_forbidden",
            "Invalid code or email address",
        ));
    }
    store.pending_codes.remove(&request.source.email_address);
    store.tokens.remove(&request.source.code);
    Ok(StatusCode::NO_CONTENT.into_response())
}
