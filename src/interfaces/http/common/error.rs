//! Maps handler outcomes to HTTP status codes.
//!
//! The status depends only on *where* a failure happened, never on what the
//! failure says: anything thrown while reading or deleting is a server
//! error, anything thrown while creating or updating is a client error.
//! The error text is returned verbatim.

use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::MessageResponse;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Lookup by id found nothing.
    #[error("{0}")]
    NotFound(String),

    /// Failure on a read or delete path.
    #[error("{0}")]
    StoreFault(String),

    /// Failure on a create or update path.
    #[error("{0}")]
    InputFault(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn store_fault(err: impl Display) -> Self {
        Self::StoreFault(err.to_string())
    }

    pub fn input_fault(err: impl Display) -> Self {
        Self::InputFault(err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::StoreFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InputFault(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
