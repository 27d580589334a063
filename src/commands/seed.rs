//! Seed command - Loads a small demo data set.
//!
//! Rows go through the CRUD repositories. Nothing is inserted when the
//! employees table already has rows.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, NotSet, Set};

use crate::config::Config;
use crate::domain::{ContractType, TelephoneType};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{
    DepartmentActiveModel, EmployeeActiveModel, ReadRepository, TelephoneActiveModel,
    WriteRepository,
};
use crate::infra::{Database, DepartmentStore, EmployeeStore, TelephoneStore};

/// Rows inserted by one seed run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub departments: usize,
    pub employees: usize,
    pub telephones: usize,
}

struct DemoEmployee {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone_number: Option<&'static str>,
    hire_date: (i32, u32, u32),
    salary: f64,
    contract_type: ContractType,
    /// Index into the demo departments
    department: Option<usize>,
    telephones: &'static [(TelephoneType, &'static str)],
}

const DEMO_DEPARTMENTS: &[(&str, &str, Option<&str>)] = &[
    ("D1", "Sales", Some("999")),
    ("D2", "Engineering", None),
];

const DEMO_EMPLOYEES: &[DemoEmployee] = &[
    DemoEmployee {
        first_name: "Ana",
        last_name: "Garcia",
        email: "ana.garcia@example.com",
        phone_number: Some("600111222"),
        hire_date: (2019, 3, 1),
        salary: 42_000.0,
        contract_type: ContractType::FullTime,
        department: Some(0),
        telephones: &[
            (TelephoneType::Mobile, "600111222"),
            (TelephoneType::Work, "910000001"),
        ],
    },
    DemoEmployee {
        first_name: "Leo",
        last_name: "Martin",
        email: "leo.martin@example.com",
        phone_number: None,
        hire_date: (2023, 9, 15),
        salary: 18_500.0,
        contract_type: ContractType::Internship,
        department: None,
        telephones: &[(TelephoneType::Home, "910222333")],
    },
    DemoEmployee {
        first_name: "Marta",
        last_name: "Lopez",
        email: "marta.lopez@example.com",
        phone_number: Some("600333444"),
        hire_date: (2021, 1, 11),
        salary: 51_000.0,
        contract_type: ContractType::FullTime,
        department: Some(1),
        telephones: &[],
    },
    DemoEmployee {
        first_name: "Iker",
        last_name: "Ruiz",
        email: "iker.ruiz@example.com",
        phone_number: None,
        hire_date: (2022, 6, 20),
        salary: 24_000.0,
        contract_type: ContractType::PartTime,
        department: Some(0),
        telephones: &[],
    },
];

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    db.ensure_schema().await?;

    let report = seed(db.connection()).await?;
    tracing::info!(
        departments = report.departments,
        employees = report.employees,
        telephones = report.telephones,
        "Seed finished"
    );
    Ok(())
}

/// Insert the demo rows unless employees already exist.
pub async fn seed(db: &DatabaseConnection) -> AppResult<SeedReport> {
    let departments = DepartmentStore::new(db.clone());
    let employees = EmployeeStore::new(db.clone());
    let telephones = TelephoneStore::new(db.clone());

    let existing = employees.count().await?;
    if existing > 0 {
        tracing::info!(existing, "Employees already present, skipping seed");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();

    let mut department_ids = Vec::with_capacity(DEMO_DEPARTMENTS.len());
    for (code, name, phone_number) in DEMO_DEPARTMENTS {
        let department = departments
            .insert(DepartmentActiveModel {
                id: NotSet,
                code: Set(code.to_string()),
                name: Set(name.to_string()),
                phone_number: Set(phone_number.map(str::to_string)),
            })
            .await?;
        department_ids.push(department.id);
        report.departments += 1;
    }

    for demo in DEMO_EMPLOYEES {
        let (year, month, day) = demo.hire_date;
        let hire_date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::internal(format!("invalid hire date for {}", demo.email)))?;
        let department_id = demo
            .department
            .and_then(|index| department_ids.get(index).copied());

        let employee = employees
            .insert(EmployeeActiveModel {
                id: NotSet,
                first_name: Set(demo.first_name.to_string()),
                last_name: Set(demo.last_name.to_string()),
                email: Set(demo.email.to_string()),
                phone_number: Set(demo.phone_number.map(str::to_string)),
                hire_date: Set(hire_date),
                salary: Set(demo.salary),
                contract_type: Set(demo.contract_type),
                department_id: Set(department_id),
            })
            .await?;
        report.employees += 1;

        for (telephone_type, number) in demo.telephones {
            telephones
                .insert(TelephoneActiveModel {
                    employee_id: Set(employee.id),
                    telephone_type: Set(*telephone_type),
                    number: Set(number.to_string()),
                })
                .await?;
            report.telephones += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::db::testing::memory_database;
    use crate::infra::repositories::{DepartmentModel, EmployeeModel};

    #[tokio::test]
    async fn seed_inserts_the_demo_rows() {
        let db = memory_database().await;

        let report = seed(db.connection()).await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                departments: 2,
                employees: 4,
                telephones: 3,
            }
        );
    }

    #[tokio::test]
    async fn leo_has_no_department() {
        let db = memory_database().await;
        seed(db.connection()).await.unwrap();

        let employees: Vec<EmployeeModel> =
            ReadRepository::find_all(&EmployeeStore::new(db.get_connection()))
                .await
                .unwrap();
        let departments: Vec<DepartmentModel> =
            ReadRepository::find_all(&DepartmentStore::new(db.get_connection()))
                .await
                .unwrap();

        let leo = employees.iter().find(|e| e.first_name == "Leo").unwrap();
        assert_eq!(leo.department_id, None);
        let ana = employees.iter().find(|e| e.first_name == "Ana").unwrap();
        let sales = departments.iter().find(|d| d.code == "D1").unwrap();
        assert_eq!(ana.department_id, Some(sales.id));
        assert_eq!(sales.phone_number.as_deref(), Some("999"));
    }

    #[tokio::test]
    async fn seed_is_skipped_when_employees_exist() {
        let db = memory_database().await;
        seed(db.connection()).await.unwrap();

        let report = seed(db.connection()).await.unwrap();

        assert_eq!(report, SeedReport::default());
        let employees = EmployeeStore::new(db.get_connection()).count().await.unwrap();
        assert_eq!(employees, 4);
    }
}
