//! Movie entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::documents::{Awards, Imdb, StringList};

/// Movie model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub plot: Option<String>,
    pub fullplot: Option<String>,
    pub genres: Option<StringList>,
    /// Running time in minutes
    pub runtime: Option<i32>,
    pub cast: Option<StringList>,
    pub poster: Option<String>,
    pub languages: Option<StringList>,
    pub released: Option<DateTime<Utc>>,
    pub directors: Option<StringList>,
    pub writers: Option<StringList>,
    pub rated: Option<String>,
    pub awards: Option<Awards>,
    pub year: Option<i32>,
    pub imdb: Option<Imdb>,
    pub countries: Option<StringList>,
    /// "movie" or "series"
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub num_mflix_comments: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
