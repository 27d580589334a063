//! Telephone database entity for SeaORM.
//!
//! Keyed by (employee, telephone type); see [`crate::domain::TelephoneKey`].

use sea_orm::entity::prelude::*;

use crate::domain::{TelephoneKey, TelephoneType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "telephones")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub telephone_type: TelephoneType,
    pub number: String,
}

impl Model {
    pub fn key(&self) -> TelephoneKey {
        TelephoneKey::new(self.employee_id, self.telephone_type)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
