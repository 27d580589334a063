//! Infrastructure layer - External systems integration
//!
//! Database connection, schema bootstrap, repositories and the Unit of
//! Work that scopes transactions.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::Database;
pub use repositories::{
    DepartmentStore, EmployeeDetailRepository, EmployeeDetailStore, EmployeeRepository,
    EmployeeStore, OrderItemStore, TelephoneStore,
};
pub use unit_of_work::{Persistence, TransactionContext, TxEmployeeRepository, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockEmployeeDetailRepository, MockEmployeeRepository};
