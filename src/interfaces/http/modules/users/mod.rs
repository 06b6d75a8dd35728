//! Users module — `/api/users`

pub mod dto;

pub use dto::*;

use sea_orm::Set;

use crate::domain::{ObjectId, Resource};
use crate::infrastructure::database::entities::user;

pub struct Users;

impl Resource for Users {
    type Entity = user::Entity;
    type Model = user::Model;
    type ActiveModel = user::ActiveModel;
    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;

    const NAME: &'static str = "User";
    const PATH: &'static str = "/api/users";
    const COLLECTION_KEY: &'static str = "users";
    const TOTAL_KEY: &'static str = "totalUsers";
    const TAG: &'static str = "Users";

    fn id_column() -> user::Column {
        user::Column::Id
    }

    fn new_record(id: ObjectId, payload: CreateUserRequest) -> user::ActiveModel {
        user::ActiveModel {
            id: Set(id.into()),
            name: Set(payload.name),
            email: Set(payload.email),
            password: Set(payload.password),
        }
    }

    fn apply_patch(record: &mut user::ActiveModel, patch: UpdateUserRequest) {
        if let Some(name) = patch.name {
            record.name = Set(name);
        }
        if let Some(email) = patch.email {
            record.email = Set(email);
        }
        if let Some(password) = patch.password {
            record.password = Set(password);
        }
    }
}
