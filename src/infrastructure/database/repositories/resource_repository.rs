//! SeaORM implementation of `ResourceRepository`, shared by every resource.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::debug;

use crate::domain::{ObjectId, Resource, ResourceRepository};
use crate::shared::StoreError;

pub struct SeaOrmResourceRepository<R> {
    db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> SeaOrmResourceRepository<R> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
        id.parse()
            .map_err(|_| StoreError::invalid_id(R::NAME, id))
    }

    async fn find_model(&self, id: &ObjectId) -> Result<Option<R::Model>, StoreError> {
        let model = R::Entity::find()
            .filter(R::id_column().eq(id.as_str()))
            .one(&self.db)
            .await?;
        Ok(model)
    }

    /// Writes `patch` over `model`. A row removed since `model` was read
    /// counts as absent.
    async fn save_patch(
        &self,
        model: R::Model,
        patch: R::Update,
    ) -> Result<Option<R::Model>, StoreError> {
        let mut active = model.clone().into_active_model();
        R::apply_patch(&mut active, patch);
        if !active.is_changed() {
            return Ok(Some(model));
        }

        match active.update(&self.db).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Negative skips read from the start.
fn window_offset(skip: i64) -> u64 {
    u64::try_from(skip).unwrap_or(0)
}

/// A negative limit caps the page by its magnitude.
fn window_limit(limit: i64) -> u64 {
    limit.unsigned_abs()
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for SeaOrmResourceRepository<R> {
    async fn find_page(&self, skip: i64, limit: i64) -> Result<Vec<R::Model>, StoreError> {
        debug!(resource = R::NAME, skip, limit, "Loading page");

        let models = R::Entity::find()
            .order_by_asc(R::id_column())
            .offset(window_offset(skip))
            .limit(window_limit(limit))
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let total = R::Entity::find().count(&self.db).await?;
        Ok(total)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<R::Model>, StoreError> {
        let id = Self::parse_id(id)?;
        self.find_model(&id).await
    }

    async fn insert(&self, payload: R::Create) -> Result<R::Model, StoreError> {
        let id = ObjectId::generate();
        debug!(resource = R::NAME, %id, "Inserting record");

        let model = R::new_record(id, payload).insert(&self.db).await?;
        Ok(model)
    }

    async fn update_by_id(
        &self,
        id: &str,
        patch: R::Update,
    ) -> Result<Option<R::Model>, StoreError> {
        let id = Self::parse_id(id)?;
        let Some(model) = self.find_model(&id).await? else {
            return Ok(None);
        };

        debug!(resource = R::NAME, %id, "Updating record");
        self.save_patch(model, patch).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<R::Model>, StoreError> {
        let id = Self::parse_id(id)?;
        let Some(model) = self.find_model(&id).await? else {
            return Ok(None);
        };

        // Only the caller whose statement removed the row reports it deleted.
        let result = R::Entity::delete_many()
            .filter(R::id_column().eq(id.as_str()))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            debug!(resource = R::NAME, %id, "Record already deleted");
            return Ok(None);
        }

        debug!(resource = R::NAME, %id, "Deleted record");
        Ok(Some(model))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sea_orm_migration::MigratorTrait;
    use tempfile::TempDir;

    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use crate::interfaces::http::modules::users::{CreateUserRequest, UpdateUserRequest, Users};

    /// Pooled store over a file database, so requests really run side by side.
    async fn pooled_store(dir: &TempDir) -> Arc<SeaOrmResourceRepository<Users>> {
        let path = dir.path().join("mflix.db");
        let db = init_database(&DatabaseConfig::sqlite(path.to_str().unwrap()))
            .await
            .unwrap();
        Migrator::up(&db, None).await.unwrap();
        Arc::new(SeaOrmResourceRepository::new(db))
    }

    async fn insert_user(store: &SeaOrmResourceRepository<Users>, i: usize) -> String {
        let user = store
            .insert(CreateUserRequest {
                name: format!("User {i}"),
                email: format!("user{i}@example.com"),
                password: "secret".to_string(),
            })
            .await
            .unwrap();
        user.id
    }

    fn rename(name: &str) -> UpdateUserRequest {
        UpdateUserRequest {
            name: Some(name.to_string()),
            email: None,
            password: None,
        }
    }

    #[test]
    fn negative_skip_reads_from_start() {
        assert_eq!(window_offset(-15), 0);
        assert_eq!(window_offset(0), 0);
        assert_eq!(window_offset(10), 10);
    }

    #[test]
    fn negative_limit_uses_magnitude() {
        assert_eq!(window_limit(-5), 5);
        assert_eq!(window_limit(10), 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_deletes_report_one_success_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = pooled_store(&dir).await;
        let mut ids = Vec::new();
        for i in 0..10 {
            ids.push(insert_user(&store, i).await);
        }

        let mut tasks = Vec::new();
        for id in &ids {
            for _ in 0..6 {
                let store = Arc::clone(&store);
                let id = id.clone();
                tasks.push(tokio::spawn(async move { store.delete_by_id(&id).await }));
            }
        }

        let mut deleted = 0;
        for task in tasks {
            if task.await.unwrap().unwrap().is_some() {
                deleted += 1;
            }
        }

        assert_eq!(deleted, ids.len());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_of_row_deleted_after_lookup_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = pooled_store(&dir).await;
        let id = insert_user(&store, 1).await;

        let stale = store.find_by_id(&id).await.unwrap().unwrap();
        assert!(store.delete_by_id(&id).await.unwrap().is_some());

        let updated = store.save_patch(stale, rename("Gone")).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_update_and_delete_never_fail() {
        let dir = tempfile::tempdir().unwrap();
        let store = pooled_store(&dir).await;

        let mut tasks = Vec::new();
        for i in 0..20 {
            let id = insert_user(&store, i).await;
            let updater = Arc::clone(&store);
            let update_id = id.clone();
            tasks.push(tokio::spawn(async move {
                updater.update_by_id(&update_id, rename("Renamed")).await.map(|_| ())
            }));
            let deleter = Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                deleter.delete_by_id(&id).await.map(|_| ())
            }));
        }

        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
