//! Comment request bodies

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::ObjectId;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Id of the commented movie
    #[validate(custom(function = "validate_object_id"))]
    pub movie_id: String,
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    /// Defaults to the time of creation
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(custom(function = "validate_object_id"))]
    pub movie_id: Option<String>,
    #[validate(length(min = 1, message = "text is required"))]
    pub text: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    if ObjectId::is_valid(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("object_id");
        err.message = Some("must be a 24-character hexadecimal id".into());
        Err(err)
    }
}
