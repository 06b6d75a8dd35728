//! Theaters module — `/api/theaters`

pub mod dto;

pub use dto::*;

use sea_orm::Set;

use crate::domain::{ObjectId, Resource};
use crate::infrastructure::database::entities::theater;

pub struct Theaters;

impl Resource for Theaters {
    type Entity = theater::Entity;
    type Model = theater::Model;
    type ActiveModel = theater::ActiveModel;
    type Create = CreateTheaterRequest;
    type Update = UpdateTheaterRequest;

    const NAME: &'static str = "Theater";
    const PATH: &'static str = "/api/theaters";
    const COLLECTION_KEY: &'static str = "theaters";
    const TOTAL_KEY: &'static str = "totalTheaters";
    const TAG: &'static str = "Theaters";

    fn id_column() -> theater::Column {
        theater::Column::Id
    }

    fn new_record(id: ObjectId, payload: CreateTheaterRequest) -> theater::ActiveModel {
        theater::ActiveModel {
            id: Set(id.into()),
            theater_id: Set(payload.theater_id),
            location: Set(payload.location),
        }
    }

    fn apply_patch(record: &mut theater::ActiveModel, patch: UpdateTheaterRequest) {
        if let Some(theater_id) = patch.theater_id {
            record.theater_id = Set(theater_id);
        }
        if let Some(location) = patch.location {
            record.location = Set(location);
        }
    }
}
