//! Shared types used across layers.

mod pagination;

pub use pagination::{BasicEmployeeInformationPage, Page, PageRequest, PaginationParams};
