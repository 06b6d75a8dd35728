//! Comments module — `/api/comments`

pub mod dto;

pub use dto::*;

use chrono::Utc;
use sea_orm::Set;

use crate::domain::{ObjectId, Resource};
use crate::infrastructure::database::entities::comment;

pub struct Comments;

impl Resource for Comments {
    type Entity = comment::Entity;
    type Model = comment::Model;
    type ActiveModel = comment::ActiveModel;
    type Create = CreateCommentRequest;
    type Update = UpdateCommentRequest;

    const NAME: &'static str = "Comment";
    const PATH: &'static str = "/api/comments";
    const COLLECTION_KEY: &'static str = "comments";
    const TOTAL_KEY: &'static str = "totalComments";
    const TAG: &'static str = "Comments";

    fn id_column() -> comment::Column {
        comment::Column::Id
    }

    fn new_record(id: ObjectId, payload: CreateCommentRequest) -> comment::ActiveModel {
        comment::ActiveModel {
            id: Set(id.into()),
            name: Set(payload.name),
            email: Set(payload.email),
            movie_id: Set(payload.movie_id.to_ascii_lowercase()),
            text: Set(payload.text),
            date: Set(payload.date.unwrap_or_else(Utc::now)),
        }
    }

    fn apply_patch(record: &mut comment::ActiveModel, patch: UpdateCommentRequest) {
        if let Some(name) = patch.name {
            record.name = Set(name);
        }
        if let Some(email) = patch.email {
            record.email = Set(email);
        }
        if let Some(movie_id) = patch.movie_id {
            record.movie_id = Set(movie_id.to_ascii_lowercase());
        }
        if let Some(text) = patch.text {
            record.text = Set(text);
        }
        if let Some(date) = patch.date {
            record.date = Set(date);
        }
    }
}
