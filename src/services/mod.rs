//! Application services layer - Use cases.
//!
//! Services depend on the Unit of Work abstraction for repository access
//! and transaction scoping.

mod employee_service;

pub use employee_service::{EmployeeManager, EmployeeService};

#[cfg(any(test, feature = "test-utils"))]
pub use employee_service::MockEmployeeService;
