//! Department store.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::base::impl_crud_repository;
use super::entities::{department, DepartmentActiveModel, DepartmentEntity, DepartmentModel};
use crate::errors::AppResult;

pub struct DepartmentStore {
    db: DatabaseConnection,
}

impl DepartmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find a department by its unique code
    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<DepartmentModel>> {
        DepartmentEntity::find()
            .filter(department::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }
}

impl_crud_repository!(
    DepartmentStore,
    DepartmentEntity,
    DepartmentModel,
    DepartmentActiveModel
);
