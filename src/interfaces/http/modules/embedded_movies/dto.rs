//! Embedded movie request bodies: a movie body plus `plot_embedding`

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::interfaces::http::common::nullable;
use crate::interfaces::http::modules::movies::{CreateMovieRequest, UpdateMovieRequest};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmbeddedMovieRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub movie: CreateMovieRequest,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub plot_embedding: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmbeddedMovieRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub movie: UpdateMovieRequest,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Vec<f64>>)]
    pub plot_embedding: Option<Option<Vec<f64>>>,
}
