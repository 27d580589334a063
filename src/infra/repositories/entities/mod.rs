//! SeaORM entity definitions
//!
//! These are database-specific entities separate from the domain read models.

pub mod department;
pub mod employee;
pub mod order_item;
pub mod telephone;

pub use department::{
    ActiveModel as DepartmentActiveModel, Entity as DepartmentEntity, Model as DepartmentModel,
};
pub use employee::{
    ActiveModel as EmployeeActiveModel, Entity as EmployeeEntity, Model as EmployeeModel,
};
pub use order_item::{
    ActiveModel as OrderItemActiveModel, Entity as OrderItemEntity, Model as OrderItemModel,
};
pub use telephone::{
    ActiveModel as TelephoneActiveModel, Entity as TelephoneEntity, Model as TelephoneModel,
};
