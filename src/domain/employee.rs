//! Employee read models.
//!
//! Neither type is stored on its own. Both are materialized straight from
//! query rows and are never written back.

use chrono::NaiveDate;
use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

use super::ContractType;

/// Contact subset of an employee row.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BasicEmployeeInformation {
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Gomez")]
    pub last_name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "111")]
    pub phone_number: Option<String>,
}

/// One employee flattened with the department it belongs to.
///
/// Produced by an inner join of `employees` and `departments`, so an
/// employee without a department has no detail row.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_employee: Option<String>,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub contract_type: ContractType,
    /// Department code
    #[schema(example = "D1")]
    pub code: String,
    /// Department name
    #[schema(example = "Sales")]
    pub name: String,
    pub phone_department: Option<String>,
}
