use async_trait::async_trait;

use super::Resource;
use crate::shared::StoreError;

/// Record store for one resource.
///
/// `skip`/`limit` come straight from the pagination window and may be
/// negative; implementations decide how to apply such values.
#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    async fn find_page(&self, skip: i64, limit: i64) -> Result<Vec<R::Model>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<R::Model>, StoreError>;

    async fn insert(&self, payload: R::Create) -> Result<R::Model, StoreError>;

    /// Apply `patch` and return the record as stored afterwards.
    async fn update_by_id(&self, id: &str, patch: R::Update)
        -> Result<Option<R::Model>, StoreError>;

    /// Remove the record and return it as it was before removal.
    async fn delete_by_id(&self, id: &str) -> Result<Option<R::Model>, StoreError>;
}
