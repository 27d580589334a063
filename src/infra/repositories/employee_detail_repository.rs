//! Read-only repository over the employee/department join.
//!
//! `EmployeeDetail` has no table of its own: every call re-runs the join, so
//! there is no write path and no caching.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};

use crate::domain::EmployeeDetail;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One row per employee that belongs to a department.
pub const EMPLOYEE_DETAIL_SQL: &str = r#"
SELECT e.id AS employee_id, e.first_name, e.last_name, e.email,
       e.phone_number AS phone_employee, e.salary, e.hire_date, e.contract_type,
       d.code, d.name, d.phone_number AS phone_department
FROM employees AS e
    INNER JOIN departments AS d ON (e.department_id = d.id)
"#;

fn detail_by_id_sql() -> String {
    format!("SELECT * FROM ({EMPLOYEE_DETAIL_SQL}) AS employee_detail WHERE employee_id = $1")
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeDetailRepository: Send + Sync {
    /// Every row of the detail view
    async fn find_all(&self) -> AppResult<Vec<EmployeeDetail>>;

    /// Detail row of a single employee; `None` when the employee is missing
    /// or has no department
    async fn find_by_id(&self, employee_id: i64) -> AppResult<Option<EmployeeDetail>>;
}

pub struct EmployeeDetailStore {
    db: DatabaseConnection,
}

impl EmployeeDetailStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeDetailRepository for EmployeeDetailStore {
    async fn find_all(&self) -> AppResult<Vec<EmployeeDetail>> {
        let backend = self.db.get_database_backend();
        let rows = EmployeeDetail::find_by_statement(Statement::from_string(
            backend,
            EMPLOYEE_DETAIL_SQL,
        ))
        .all(&self.db)
        .await?;

        tracing::debug!(rows = rows.len(), "loaded employee details");
        Ok(rows)
    }

    async fn find_by_id(&self, employee_id: i64) -> AppResult<Option<EmployeeDetail>> {
        let backend = self.db.get_database_backend();
        EmployeeDetail::find_by_statement(Statement::from_sql_and_values(
            backend,
            detail_by_id_sql(),
            [employee_id.into()],
        ))
        .one(&self.db)
        .await
        .map_err(Into::into)
    }
}
