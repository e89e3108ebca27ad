//! HTTP API for city infos and recipes
//!
//! This crate wires the recipe store and the upstream city directory into an
//! axum router, documents it with OpenAPI, and runs it as a server.

pub mod error;
pub mod http_server;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use http_server::{HttpServer, ServerConfig, DEFAULT_PORT};
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
