//! HTTP REST API interfaces
//!
//! - `common`: error mapping, message bodies and the validating extractor
//! - `modules`: one module per resource plus health
//! - `request_id`: `X-Request-Id` correlation middleware
//! - `resource`: generic CRUD handlers shared by every resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod openapi;
pub mod request_id;
pub mod resource;
pub mod router;

#[cfg(test)]
mod tests;

pub use router::create_api_router;
