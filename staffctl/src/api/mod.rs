//! HTTP API surface: request handlers and data models.
//!
//! - [`handlers`]: Axum route handlers, one module per resource
//! - [`models`]: Request/response structures defining the public API contract

pub mod handlers;
pub mod models;

use crate::errors::Error;
use axum::{
    extract::FromRequest,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON extractor and response wrapper.
///
/// Deserialization failures (malformed bodies, missing required fields)
/// are reported as 400 Bad Request via [`Error::BadRequest`] instead of
/// axum's default 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
