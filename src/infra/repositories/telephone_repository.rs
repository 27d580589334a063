//! Telephone store, keyed by (employee, telephone type).

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::base::impl_crud_repository;
use super::entities::{telephone, TelephoneActiveModel, TelephoneEntity, TelephoneModel};
use crate::domain::{TelephoneKey, TelephoneType};
use crate::errors::AppResult;

pub struct TelephoneStore {
    db: DatabaseConnection,
}

impl TelephoneStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_key(&self, key: TelephoneKey) -> AppResult<Option<TelephoneModel>> {
        TelephoneEntity::find_by_id(<(i64, TelephoneType)>::from(key))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    /// All numbers registered for one employee
    pub async fn find_by_employee(&self, employee_id: i64) -> AppResult<Vec<TelephoneModel>> {
        TelephoneEntity::find()
            .filter(telephone::Column::EmployeeId.eq(employee_id))
            .order_by_asc(telephone::Column::TelephoneType)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    pub async fn delete_by_key(&self, key: TelephoneKey) -> AppResult<u64> {
        let result = TelephoneEntity::delete_by_id(<(i64, TelephoneType)>::from(key))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}

impl_crud_repository!(
    TelephoneStore,
    TelephoneEntity,
    TelephoneModel,
    TelephoneActiveModel
);
