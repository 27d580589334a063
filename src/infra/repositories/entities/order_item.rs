//! Order item database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::OrderItemKey;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i64,
    pub quantity: i32,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
}

impl Model {
    pub fn key(&self) -> OrderItemKey {
        OrderItemKey::new(self.order_id, self.product_id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
