//! Generic CRUD handlers
//!
//! One set of handlers serves every [`Resource`]. Each handler turns its
//! failures into an [`ApiError`] chosen by the operation, not by the error:
//! list/read/delete failures become 500, create/update failures become 400.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{Resource, ResourceRepository};
use crate::interfaces::http::common::{ApiError, MessageResponse, ValidatedJson};
use crate::shared::{PageBody, PageRequest, PageResult};

/// Handler state for one resource
pub struct ResourceState<R: Resource> {
    pub repo: Arc<dyn ResourceRepository<R>>,
}

impl<R: Resource> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

/// Raw `page`/`limit` query values; resolved by [`PageRequest::resolve`].
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// 1-based page number, default 1
    pub page: Option<String>,
    /// Page size, default 10
    pub limit: Option<String>,
}

/// `GET /`: one page of records in id order
pub async fn list<R: Resource>(
    State(state): State<ResourceState<R>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PageBody<R::Model>>, ApiError> {
    // A query string that does not even parse counts as "no parameters".
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let request = PageRequest::resolve(query.page.as_deref(), query.limit.as_deref());

    let items = state
        .repo
        .find_page(request.skip(), request.limit)
        .await
        .map_err(|e| {
            error!(resource = R::NAME, error = %e, "Failed to list records");
            ApiError::store_fault(e)
        })?;

    let total = state.repo.count().await.map_err(|e| {
        error!(resource = R::NAME, error = %e, "Failed to count records");
        ApiError::store_fault(e)
    })?;

    let page = PageResult::new(items, total, request);
    Ok(Json(page.into_body(R::COLLECTION_KEY, R::TOTAL_KEY)))
}

/// `GET /{id}`
pub async fn get_one<R: Resource>(
    State(state): State<ResourceState<R>>,
    Path(id): Path<String>,
) -> Result<Json<R::Model>, ApiError> {
    state
        .repo
        .find_by_id(&id)
        .await
        .map_err(ApiError::store_fault)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(R::not_found_message()))
}

/// `POST /`: 201 with the stored record
pub async fn create<R: Resource>(
    State(state): State<ResourceState<R>>,
    ValidatedJson(payload): ValidatedJson<R::Create>,
) -> Result<(StatusCode, Json<R::Model>), ApiError> {
    let record = state
        .repo
        .insert(payload)
        .await
        .map_err(ApiError::input_fault)?;

    info!(resource = R::NAME, "Record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /{id}`: partial update, returns the record after the change
pub async fn update<R: Resource>(
    State(state): State<ResourceState<R>>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<R::Update>,
) -> Result<Json<R::Model>, ApiError> {
    state
        .repo
        .update_by_id(&id, patch)
        .await
        .map_err(ApiError::input_fault)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(R::not_found_message()))
}

/// `DELETE /{id}`
pub async fn delete<R: Resource>(
    State(state): State<ResourceState<R>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state
        .repo
        .delete_by_id(&id)
        .await
        .map_err(ApiError::store_fault)?
    {
        Some(_) => {
            info!(resource = R::NAME, id = %id, "Record deleted");
            Ok(Json(MessageResponse::new(R::deleted_message())))
        }
        None => Err(ApiError::not_found(R::not_found_message())),
    }
}

/// Routes for one resource, to be nested under `R::PATH`.
pub fn resource_router<R: Resource>(repo: Arc<dyn ResourceRepository<R>>) -> Router {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/{id}",
            get(get_one::<R>).put(update::<R>).delete(delete::<R>),
        )
        .with_state(ResourceState { repo })
}
