//! Repository layer - Data access abstraction
//!
//! Table stores share the generic CRUD traits from `base`; the employee
//! projections and the detail view add their own native queries.

mod base;
mod department_repository;
mod employee_detail_repository;
mod employee_repository;
pub(crate) mod entities;
mod order_item_repository;
mod telephone_repository;

pub use base::{CrudRepository, DeleteRepository, ReadRepository, WriteRepository};
pub use department_repository::DepartmentStore;
pub use employee_detail_repository::{
    EmployeeDetailRepository, EmployeeDetailStore, EMPLOYEE_DETAIL_SQL,
};
pub use employee_repository::{
    EmployeeRepository, EmployeeStore, BASIC_INFORMATION_PAGE_SQL, BASIC_INFORMATION_SQL,
    COUNT_EMPLOYEES_SQL,
};
pub(crate) use employee_repository::{select_basic_information, select_basic_information_page};
pub use entities::{
    DepartmentActiveModel, DepartmentModel, EmployeeActiveModel, EmployeeModel,
    OrderItemActiveModel, OrderItemModel, TelephoneActiveModel, TelephoneModel,
};
pub use order_item_repository::OrderItemStore;
pub use telephone_repository::TelephoneStore;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use employee_detail_repository::MockEmployeeDetailRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
