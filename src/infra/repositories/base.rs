//! Base repository traits shared by every table-backed store.
//!
//! Each store implements the halves it needs; the default methods cover
//! plain primary-key CRUD so stores only add their custom queries.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, ModelTrait, PaginatorTrait, PrimaryKeyTrait, TryIntoModel,
};
use std::fmt::Debug;

use crate::errors::AppResult;
use crate::types::{Page, PageRequest};

/// Read operations
#[async_trait]
pub trait ReadRepository<E, M>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Find entity by primary key
    async fn find_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<Option<M>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send,
    {
        E::find_by_id(id).one(self.db()).await.map_err(Into::into)
    }

    /// Find all entities
    async fn find_all(&self) -> AppResult<Vec<M>> {
        E::find().all(self.db()).await.map_err(Into::into)
    }

    /// Find one page of entities in store order
    async fn find_page(&self, request: PageRequest) -> AppResult<Page<M>> {
        let paginator = E::find().paginate(self.db(), request.size());
        let total = paginator.num_items().await?;
        let content = paginator.fetch_page(request.page()).await?;
        Ok(Page::new(content, request, total))
    }

    /// Count all entities
    async fn count(&self) -> AppResult<u64> {
        E::find().count(self.db()).await.map_err(Into::into)
    }
}

/// Write operations
#[async_trait]
pub trait WriteRepository<E, M, A>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Insert new entity
    async fn insert(&self, model: A) -> AppResult<M>
    where
        <<A as ActiveModelTrait>::Entity as EntityTrait>::Model: Send,
    {
        model.insert(self.db()).await.map_err(Into::into)
    }

    /// Insert when the primary key is unset, update otherwise
    async fn save(&self, model: A) -> AppResult<M>
    where
        M: ModelTrait,
        A: TryIntoModel<M>,
    {
        let saved = model.save(self.db()).await?;
        saved.try_into_model().map_err(Into::into)
    }

    /// Update existing entity
    async fn update(&self, model: A) -> AppResult<M>
    where
        <<A as ActiveModelTrait>::Entity as EntityTrait>::Model: Send,
    {
        model.update(self.db()).await.map_err(Into::into)
    }
}

/// Delete operations
#[async_trait]
pub trait DeleteRepository<E>: Send + Sync
where
    E: EntityTrait,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Delete entity by primary key, returning the number of removed rows
    async fn delete_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<u64>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send + Debug,
    {
        let result = E::delete_by_id(id).exec(self.db()).await?;
        Ok(result.rows_affected)
    }
}

/// Full CRUD repository - Combines all operations
pub trait CrudRepository<E, M, A>:
    ReadRepository<E, M> + WriteRepository<E, M, A> + DeleteRepository<E>
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

// Auto-implement CrudRepository for types implementing all traits
impl<T, E, M, A> CrudRepository<E, M, A> for T
where
    T: ReadRepository<E, M> + WriteRepository<E, M, A> + DeleteRepository<E>,
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

/// Implement the three CRUD halves for a store holding a `db` connection.
macro_rules! impl_crud_repository {
    ($store:ty, $entity:ty, $model:ty, $active:ty) => {
        impl $crate::infra::repositories::ReadRepository<$entity, $model> for $store {
            fn db(&self) -> &sea_orm::DatabaseConnection {
                &self.db
            }
        }

        impl $crate::infra::repositories::WriteRepository<$entity, $model, $active> for $store {
            fn db(&self) -> &sea_orm::DatabaseConnection {
                &self.db
            }
        }

        impl $crate::infra::repositories::DeleteRepository<$entity> for $store {
            fn db(&self) -> &sea_orm::DatabaseConnection {
                &self.db
            }
        }
    };
}

pub(crate) use impl_crud_repository;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::entities::{
        DepartmentActiveModel, DepartmentEntity, DepartmentModel, TelephoneActiveModel,
        TelephoneEntity, TelephoneModel,
    };
    use crate::infra::repositories::{DepartmentStore, TelephoneStore};

    fn assert_crud<R, E, M, A>()
    where
        R: CrudRepository<E, M, A>,
        E: EntityTrait<Model = M>,
        M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    {
    }

    #[test]
    fn table_stores_get_full_crud() {
        assert_crud::<DepartmentStore, DepartmentEntity, DepartmentModel, DepartmentActiveModel>();
        assert_crud::<TelephoneStore, TelephoneEntity, TelephoneModel, TelephoneActiveModel>();
    }
}
