//! Employee repository: table CRUD plus the basic-information projections.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};

use super::base::impl_crud_repository;
use super::entities::{EmployeeActiveModel, EmployeeEntity, EmployeeModel};
use crate::domain::BasicEmployeeInformation;
use crate::errors::AppResult;
use crate::types::{Page, PageRequest};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Projection of the contact columns, in store order.
pub const BASIC_INFORMATION_SQL: &str = r#"
SELECT e.first_name AS first_name,
       e.last_name AS last_name,
       e.email AS email,
       e.phone_number AS phone_number
FROM employees AS e
"#;

/// Same projection, one page at a time. Ordered by id so page boundaries
/// stay put between requests.
pub const BASIC_INFORMATION_PAGE_SQL: &str = r#"
SELECT e.first_name AS first_name,
       e.last_name AS last_name,
       e.email AS email,
       e.phone_number AS phone_number
FROM employees AS e
ORDER BY e.id
LIMIT $1 OFFSET $2
"#;

pub const COUNT_EMPLOYEES_SQL: &str = "SELECT COUNT(*) AS count FROM employees";

/// Read queries returning employee projections.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Contact columns of every employee, unfiltered
    async fn find_basic_information(&self) -> AppResult<Vec<BasicEmployeeInformation>>;

    /// One page of contact columns plus the total employee count
    async fn find_basic_information_page(
        &self,
        request: PageRequest,
    ) -> AppResult<Page<BasicEmployeeInformation>>;
}

/// Pool-backed employee store
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl_crud_repository!(EmployeeStore, EmployeeEntity, EmployeeModel, EmployeeActiveModel);

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_basic_information(&self) -> AppResult<Vec<BasicEmployeeInformation>> {
        select_basic_information(&self.db).await
    }

    async fn find_basic_information_page(
        &self,
        request: PageRequest,
    ) -> AppResult<Page<BasicEmployeeInformation>> {
        select_basic_information_page(&self.db, request).await
    }
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

/// Run the basic-information projection on any connection or transaction.
pub(crate) async fn select_basic_information<C>(db: &C) -> AppResult<Vec<BasicEmployeeInformation>>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_string(db.get_database_backend(), BASIC_INFORMATION_SQL);
    let rows = BasicEmployeeInformation::find_by_statement(stmt)
        .all(db)
        .await?;

    tracing::debug!(rows = rows.len(), "loaded basic employee information");
    Ok(rows)
}

/// Run the paged projection followed by an independent count query.
pub(crate) async fn select_basic_information_page<C>(
    db: &C,
    request: PageRequest,
) -> AppResult<Page<BasicEmployeeInformation>>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();

    let limit = i64::try_from(request.size()).unwrap_or(i64::MAX);
    let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
    let content = BasicEmployeeInformation::find_by_statement(Statement::from_sql_and_values(
        backend,
        BASIC_INFORMATION_PAGE_SQL,
        [limit.into(), offset.into()],
    ))
    .all(db)
    .await?;

    let total = CountRow::find_by_statement(Statement::from_string(backend, COUNT_EMPLOYEES_SQL))
        .one(db)
        .await?
        .map(|row| row.count.max(0) as u64)
        .unwrap_or(0);

    tracing::debug!(
        page = request.page(),
        size = request.size(),
        rows = content.len(),
        total,
        "loaded basic employee information page"
    );
    Ok(Page::new(content, request, total))
}
