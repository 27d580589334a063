//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::ContractType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: Option<String>,
    pub hire_date: Date,
    #[sea_orm(column_type = "Double")]
    pub salary: f64,
    pub contract_type: ContractType,
    /// Owning department (NULL = unassigned)
    #[sea_orm(indexed)]
    pub department_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::telephone::Entity")]
    Telephone,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::telephone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Telephone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
