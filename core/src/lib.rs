//! Typed client for the pkmnapi game-data service.
//!
//! # Overview
//! The service exposes game records (names, stats, movesets, evolutions,
//! trades, ...) as JSON:API-style envelopes under `{domain}/v{version}/`.
//! This crate models every resource kind as a pair of typed write and read
//! shapes and offers one async method per supported operation.
//!
//! # Design
//! - `PkmnapiClient` builds `HttpRequest`s and parses `HttpResponse`s without
//!   touching the network (host-does-IO). It can be driven by any HTTP stack.
//! - `Pkmnapi` is the async facade; it pairs the client with a `Transport`,
//!   by default `ReqwestTransport`.
//! - All failures surface as one `ApiError`; a rejected call keeps the
//!   server's error document verbatim.
//! - The library emits `tracing` events and installs no subscriber.

pub mod api;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::Pkmnapi;
pub use client::PkmnapiClient;
pub use config::{ClientConfig, ConfigError};
pub use endpoint::{endpoint, path_segment};
pub use envelope::{
    CollectionResponse, DeleteEnvelope, EmbeddedObject, IdRef, Links, ReadAttributes,
    RequestEnvelope, ResourceObject, ResourceResponse, ResourceType, ToRequest, WriteAttributes,
};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
