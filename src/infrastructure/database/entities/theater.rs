//! Theater entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::documents::Location;

/// Theater model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "theaters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "theaterId")]
    pub theater_id: i32,
    pub location: Location,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
