//! Theater request bodies

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::infrastructure::database::entities::documents::Location;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTheaterRequest {
    #[serde(rename = "theaterId")]
    #[validate(range(min = 1, message = "must be a positive number"))]
    pub theater_id: i32,
    #[validate(nested)]
    pub location: Location,
}

/// Update theater request; a supplied `location` replaces the stored one
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTheaterRequest {
    #[serde(rename = "theaterId")]
    #[validate(range(min = 1, message = "must be a positive number"))]
    pub theater_id: Option<i32>,
    #[validate(nested)]
    pub location: Option<Location>,
}
