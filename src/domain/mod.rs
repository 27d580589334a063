//! Domain layer - Core shapes of the employee model
//!
//! Enumerations, composite keys and the read-only projections the API
//! returns. Table mappings live in `infra::repositories::entities`.

pub mod employee;
pub mod enums;
pub mod keys;

pub use employee::{BasicEmployeeInformation, EmployeeDetail};
pub use enums::{ContractType, TelephoneType};
pub use keys::{OrderItemKey, TelephoneKey};
