//! Order item store, keyed by (order, product).

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::base::impl_crud_repository;
use super::entities::{order_item, OrderItemActiveModel, OrderItemEntity, OrderItemModel};
use crate::domain::OrderItemKey;
use crate::errors::AppResult;

pub struct OrderItemStore {
    db: DatabaseConnection,
}

impl OrderItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_key(&self, key: OrderItemKey) -> AppResult<Option<OrderItemModel>> {
        OrderItemEntity::find_by_id(<(i64, i64)>::from(key))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    /// Lines of a single order, by product
    pub async fn find_by_order(&self, order_id: i64) -> AppResult<Vec<OrderItemModel>> {
        OrderItemEntity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::ProductId)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }
}

impl_crud_repository!(
    OrderItemStore,
    OrderItemEntity,
    OrderItemModel,
    OrderItemActiveModel
);
