//! Employee service - read use cases over the employee model.
//!
//! Pure delegation: no business rules and no error translation. The
//! basic-information reads run inside a read-only transaction; detail
//! reads go straight to the pooled repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{BasicEmployeeInformation, EmployeeDetail};
use crate::errors::AppResult;
use crate::infra::{EmployeeRepository, UnitOfWork};
use crate::types::{Page, PageRequest};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Contact columns of every employee
    async fn find_employees_basic_information(&self) -> AppResult<Vec<BasicEmployeeInformation>>;

    /// One page of contact columns with totals
    async fn find_employees_basic_information_page(
        &self,
        request: PageRequest,
    ) -> AppResult<Page<BasicEmployeeInformation>>;

    /// Every employee that belongs to a department, joined with it
    async fn find_all_employee_details(&self) -> AppResult<Vec<EmployeeDetail>>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn find_employees_basic_information(&self) -> AppResult<Vec<BasicEmployeeInformation>> {
        self.uow
            .read_only(|ctx| Box::pin(async move { ctx.employees().find_basic_information().await }))
            .await
    }

    async fn find_employees_basic_information_page(
        &self,
        request: PageRequest,
    ) -> AppResult<Page<BasicEmployeeInformation>> {
        self.uow
            .read_only(move |ctx| {
                Box::pin(async move { ctx.employees().find_basic_information_page(request).await })
            })
            .await
    }

    async fn find_all_employee_details(&self) -> AppResult<Vec<EmployeeDetail>> {
        self.uow.employee_details().find_all().await
    }
}
