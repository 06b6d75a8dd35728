//! JSON sub-documents stored in single columns.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Array of strings (genres, cast, languages, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

/// Vector embedding of a movie plot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Embedding(pub Vec<f64>);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema, Validate)]
pub struct Awards {
    #[validate(range(min = 0))]
    pub wins: Option<i32>,
    #[validate(range(min = 0))]
    pub nominations: Option<i32>,
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult, ToSchema, Validate)]
pub struct Imdb {
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: Option<f64>,
    #[validate(range(min = 0))]
    pub votes: Option<i64>,
    pub id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult, ToSchema, Validate)]
pub struct Location {
    #[validate(nested)]
    pub address: Address,
    #[validate(nested)]
    pub geo: Geo,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Address {
    #[validate(length(min = 1))]
    pub street1: String,
    pub street2: Option<String>,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub zipcode: String,
}

/// GeoJSON point, `coordinates` is `[longitude, latitude]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Geo {
    #[serde(rename = "type", default = "default_geo_type")]
    pub kind: String,
    #[validate(length(equal = 2))]
    pub coordinates: Vec<f64>,
}

fn default_geo_type() -> String {
    "Point".to_string()
}
