//! Request builder and response parser for the pkmnapi service.
//!
//! # Design
//! `PkmnapiClient` holds the versioned base URL and the default header set,
//! and nothing else. Every call is split into a `build_*` method producing an
//! `HttpRequest` and a `parse_*` method consuming an `HttpResponse`; the
//! round-trip in between belongs to the caller. The builders are generic over
//! the resource schema, so one method serves every kind.
//!
//! Error normalisation lives in `parse_*`: a non-2xx status always becomes
//! `ApiError::Server` carrying the decoded body, whatever the endpoint.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{check_access_token, ClientConfig};
use crate::endpoint::absolute_url;
use crate::envelope::{
    CollectionResponse, DeleteEnvelope, ReadAttributes, RequestEnvelope, ResourceResponse,
    WriteAttributes,
};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub const JSON_CONTENT_TYPE: &str = "application/json";

const ACCEPT: &str = "accept";
const AUTHORIZATION: &str = "authorization";
const CONTENT_TYPE: &str = "content-type";

/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct PkmnapiClient {
    base_url: String,
    default_headers: BTreeMap<String, String>,
}

impl PkmnapiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let mut default_headers = BTreeMap::new();
        default_headers.insert(ACCEPT.to_string(), JSON_CONTENT_TYPE.to_string());
        let mut client = Self {
            base_url: config.base_url(),
            default_headers,
        };
        // A blank token in an unvalidated config sends no authorization header.
        if let Some(token) = &config.access_token {
            if check_access_token(token).is_ok() {
                client.insert_bearer(token);
            }
        }
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }

    /// Merge `authorization: Bearer {token}` into the default headers,
    /// leaving the others in place. A blank token is rejected the same way
    /// `ClientConfig::validate` rejects it.
    pub fn set_access_token(&mut self, token: &str) -> Result<&mut Self, ApiError> {
        check_access_token(token)?;
        self.insert_bearer(token);
        Ok(self)
    }

    fn insert_bearer(&mut self, token: &str) {
        self.default_headers
            .insert(AUTHORIZATION.to_string(), format!("Bearer {token}"));
    }

    pub fn clear_access_token(&mut self) -> &mut Self {
        self.default_headers.remove(AUTHORIZATION);
        self
    }

    pub fn url(&self, path: &str) -> String {
        absolute_url(&self.base_url, path)
    }

    pub fn build_get(&self, path: &str) -> HttpRequest {
        self.request(HttpMethod::Get, path, self.default_headers.clone(), None)
    }

    /// GET with `accept` replaced by `accept`, for binary endpoints.
    pub fn build_get_raw(&self, path: &str, accept: &str) -> HttpRequest {
        let mut headers = self.default_headers.clone();
        headers.insert(ACCEPT.to_string(), accept.to_string());
        self.request(HttpMethod::Get, path, headers, None)
    }

    pub fn build_post<A: WriteAttributes>(
        &self,
        path: &str,
        attributes: &A,
    ) -> Result<HttpRequest, ApiError> {
        let body = encode(&RequestEnvelope::new(attributes))?;
        Ok(self.request(
            HttpMethod::Post,
            path,
            self.with_content_type(JSON_CONTENT_TYPE),
            Some(body),
        ))
    }

    pub fn build_post_raw(&self, path: &str, content_type: &str, bytes: &[u8]) -> HttpRequest {
        self.request(
            HttpMethod::Post,
            path,
            self.with_content_type(content_type),
            Some(bytes.to_vec()),
        )
    }

    /// DELETE whose body is `{"source": attributes}`.
    pub fn build_delete<A: WriteAttributes>(
        &self,
        path: &str,
        attributes: &A,
    ) -> Result<HttpRequest, ApiError> {
        let body = encode(&DeleteEnvelope::new(attributes))?;
        Ok(self.request(
            HttpMethod::Delete,
            path,
            self.with_content_type(JSON_CONTENT_TYPE),
            Some(body),
        ))
    }

    pub fn build_delete_empty(&self, path: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, path, self.default_headers.clone(), None)
    }

    /// Decode a single resource and check its tag.
    pub fn parse_resource<A: ReadAttributes>(
        &self,
        response: HttpResponse,
    ) -> Result<ResourceResponse<A>, ApiError> {
        let resource: ResourceResponse<A> = self.parse_json(response)?;
        resource.ensure_type()
    }

    /// Decode a collection and check every element's tag.
    pub fn parse_collection<A: ReadAttributes>(
        &self,
        response: HttpResponse,
    ) -> Result<CollectionResponse<A>, ApiError> {
        let collection: CollectionResponse<A> = self.parse_json(response)?;
        collection.ensure_type()
    }

    pub fn parse_json<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        check_status(&response)?;
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Untyped acknowledgement of a write. An empty body is `null`.
    pub fn parse_value(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response)?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Body bytes of a successful response, untouched.
    pub fn parse_raw(&self, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }

    fn with_content_type(&self, content_type: &str) -> BTreeMap<String, String> {
        let mut headers = self.default_headers.clone();
        headers.insert(CONTENT_TYPE.to_string(), content_type.to_string());
        headers
    }

    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        headers: BTreeMap<String, String>,
        body: Option<Vec<u8>>,
    ) -> HttpRequest {
        HttpRequest {
            method,
            url: self.url(path),
            headers: headers.into_iter().collect(),
            body,
        }
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(value).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Map any non-2xx status to `ApiError::Server` with the body decoded as
/// JSON, or kept as a string when it is not JSON.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let body = serde_json::from_slice(&response.body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&response.body).into_owned()));
    tracing::warn!(status = response.status, "request rejected");
    Err(ApiError::Server {
        status: response.status,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::envelope::ResourceType;
    use crate::types::{
        AccessTokenDeleteAttributes, EvolutionAttributes, ItemNameAttributes, ItemNameResource,
        PokemonEvolutionsAttributes, TmMoveResource,
    };
    use serde_json::json;

    fn client() -> PkmnapiClient {
        PkmnapiClient::new(&ClientConfig::default())
    }

    fn header(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    fn body_json(request: &HttpRequest) -> Value {
        serde_json::from_slice(request.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn build_get_uses_json_accept() {
        let req = client().build_get("items/names/1");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api.pkmnapi.com/v1/items/names/1");
        assert_eq!(req.headers, vec![header("accept", "application/json")]);
        assert!(req.body.is_none());
    }

    #[test]
    fn build_post_envelopes_attributes() {
        let req = client()
            .build_post("items/names/1", &ItemNameAttributes::new("FOO"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.pkmnapi.com/v1/items/names/1");
        assert_eq!(
            req.headers,
            vec![
                header("accept", "application/json"),
                header("content-type", "application/json"),
            ]
        );
        assert_eq!(
            req.body.as_deref().unwrap(),
            br#"{"data":{"type":"item_names","attributes":{"name":"FOO"}}}"#
        );
    }

    #[test]
    fn build_post_never_wraps_in_source() {
        let req = client()
            .build_post(
                "pokemon/evolutions/1",
                &PokemonEvolutionsAttributes {
                    evolutions: vec![EvolutionAttributes::level(16, 2)],
                },
            )
            .unwrap();
        let body = body_json(&req);
        assert!(body.get("source").is_none());
        assert_eq!(body["data"]["type"], "pokemon_evolutions");
    }

    #[test]
    fn build_delete_wraps_in_source() {
        let req = client()
            .build_delete(
                "access_tokens",
                &AccessTokenDeleteAttributes::new("1337", "foo@bar.com"),
            )
            .unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "https://api.pkmnapi.com/v1/access_tokens");
        assert_eq!(
            req.body.as_deref().unwrap(),
            br#"{"source":{"code":"1337","email_address":"foo@bar.com"}}"#
        );
    }

    #[test]
    fn build_get_raw_replaces_accept() {
        let req = client().build_get_raw("icons/1", "image/gif");
        assert_eq!(req.headers, vec![header("accept", "image/gif")]);
    }

    #[test]
    fn build_post_raw_sends_bytes_untouched() {
        let req = client().build_post_raw("roms", "application/octet-stream", &[0x00, 0xff, 0x10]);
        assert_eq!(req.header("content-type"), Some("application/octet-stream"));
        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.body, Some(vec![0x00, 0xff, 0x10]));
    }

    #[test]
    fn access_token_merges_into_defaults() {
        let mut client = client();
        client.set_access_token("abc").unwrap();
        let req = client.build_get("roms");
        assert_eq!(
            req.headers,
            vec![
                header("accept", "application/json"),
                header("authorization", "Bearer abc"),
            ]
        );

        client.clear_access_token();
        assert_eq!(client.build_get("roms").header("authorization"), None);
    }

    #[test]
    fn configured_token_is_applied() {
        let config = ClientConfig {
            access_token: Some("xyz".to_string()),
            ..ClientConfig::default()
        };
        let req = PkmnapiClient::new(&config).build_delete_empty("savs");
        assert_eq!(req.header("authorization"), Some("Bearer xyz"));
        assert!(req.body.is_none());
    }

    #[test]
    fn blank_access_token_is_rejected_and_keeps_previous() {
        let mut client = client();
        client.set_access_token("abc").unwrap();
        for blank in ["", "   "] {
            let err = client.set_access_token(blank).unwrap_err();
            assert!(matches!(
                err,
                ApiError::Config(ConfigError::InvalidValue { field: "access_token", .. })
            ));
        }
        assert_eq!(client.build_get("roms").header("authorization"), Some("Bearer abc"));
    }

    #[test]
    fn blank_token_in_unvalidated_config_sends_no_header() {
        let config = ClientConfig {
            access_token: Some(" ".to_string()),
            ..ClientConfig::default()
        };
        let client = PkmnapiClient::new(&config);
        assert_eq!(client.build_get("roms").header("authorization"), None);
    }

    #[test]
    fn built_request_is_unaffected_by_later_token_change() {
        let mut client = client();
        let before = client.build_get("roms");
        client.set_access_token("late").unwrap();
        assert_eq!(before.header("authorization"), None);
    }

    #[test]
    fn parse_resource_rejects_foreign_embedded_tag() {
        let response = HttpResponse::new(
            200,
            json!({
                "data": {
                    "id": "1",
                    "type": "tm_moves",
                    "attributes": {
                        "move": {
                            "id": "4",
                            "type": "item_names",
                            "attributes": {"name": "POKé BALL"},
                            "links": {}
                        }
                    },
                    "links": {}
                },
                "links": {}
            })
            .to_string(),
        );
        let err = client()
            .parse_resource::<TmMoveResource>(response)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_resource_success() {
        let response = HttpResponse::new(
            200,
            r#"{"data":{"id":"1","type":"item_names","attributes":{"name":"MASTER BALL"},"links":{"self":"https://api.pkmnapi.com/v1/items/names/1"}},"links":{"self":"https://api.pkmnapi.com/v1/items/names/1"}}"#,
        );
        let item = client()
            .parse_resource::<ItemNameResource>(response)
            .unwrap();
        assert_eq!(item.data.id, "1");
        assert_eq!(item.data.resource_type, ResourceType::ItemNames);
        assert_eq!(item.attributes().name, "MASTER BALL");
    }

    #[test]
    fn parse_resource_rejects_wrong_tag() {
        let response = HttpResponse::new(
            200,
            r#"{"data":{"id":"1","type":"move_names","attributes":{"name":"POUND"},"links":{}},"links":{}}"#,
        );
        let err = client()
            .parse_resource::<ItemNameResource>(response)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_collection_success() {
        let response = HttpResponse::new(
            200,
            r#"{"data":[{"id":"1","type":"item_names","attributes":{"name":"MASTER BALL"},"links":{}},{"id":"2","type":"item_names","attributes":{"name":"ULTRA BALL"},"links":{}}],"links":{}}"#,
        );
        let items = client()
            .parse_collection::<ItemNameResource>(response)
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.data[1].attributes.name, "ULTRA BALL");
    }

    #[test]
    fn non_success_keeps_json_body() {
        let body = json!({
            "data": {
                "id": "error_not_found",
                "type": "errors",
                "attributes": {"message": "Invalid item ID 200"}
            }
        });
        let response = HttpResponse::new(404, serde_json::to_vec(&body).unwrap());
        let err = client()
            .parse_resource::<ItemNameResource>(response)
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.payload(), body);
    }

    #[test]
    fn non_success_keeps_text_body_as_string() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_value(response).unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
        assert_eq!(err.payload(), json!("internal error"));
    }

    #[test]
    fn parse_value_maps_empty_body_to_null() {
        assert_eq!(client().parse_value(HttpResponse::new(204, Vec::new())).unwrap(), Value::Null);
        assert_eq!(client().parse_value(HttpResponse::new(202, "{}")).unwrap(), json!({}));
    }

    #[test]
    fn parse_raw_returns_bytes_untouched() {
        let gif = b"GIF89a\x01\x00\x01\x00".to_vec();
        assert_eq!(client().parse_raw(HttpResponse::new(200, gif.clone())).unwrap(), gif);
    }

    #[test]
    fn parse_json_bad_body_is_decode_error() {
        let err = client()
            .parse_collection::<ItemNameResource>(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn trailing_slash_on_domain_is_stripped() {
        let client = PkmnapiClient::new(&ClientConfig::with_domain("http://localhost:3000/"));
        assert_eq!(client.build_get("roms").url, "http://localhost:3000/v1/roms");
    }
}
