//! Description of one REST resource.
//!
//! Every resource (users, movies, ...) is served by the same generic
//! handlers and the same generic store adapter. A `Resource` implementation
//! supplies everything that differs between them: names, the sea-orm entity,
//! the request payload types, and how payloads map onto rows.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, FromQueryResult, IntoActiveModel,
    ModelTrait,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use super::ObjectId;

pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;

    /// Body of `POST /api/<resource>`.
    type Create: DeserializeOwned + Validate + ToSchema + Send + 'static;
    /// Body of `PUT /api/<resource>/{id}`; every field optional.
    type Update: DeserializeOwned + Validate + ToSchema + Send + 'static;

    /// Singular display name, used in messages ("User not found").
    const NAME: &'static str;
    /// Route prefix, e.g. `/api/users`.
    const PATH: &'static str;
    /// JSON key holding the records of a page, e.g. `users`.
    const COLLECTION_KEY: &'static str;
    /// JSON key holding the record count, e.g. `totalUsers`.
    const TOTAL_KEY: &'static str;
    /// OpenAPI tag.
    const TAG: &'static str;

    /// Primary key column, also the listing order.
    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn new_record(id: ObjectId, payload: Self::Create) -> Self::ActiveModel;

    /// Copy the fields present in `patch` onto `record`.
    fn apply_patch(record: &mut Self::ActiveModel, patch: Self::Update);

    fn not_found_message() -> String {
        format!("{} not found", Self::NAME)
    }

    fn deleted_message() -> String {
        format!("{} deleted successfully", Self::NAME)
    }
}
