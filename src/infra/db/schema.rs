//! Table bootstrap from the SeaORM entity definitions.
//!
//! `CREATE TABLE IF NOT EXISTS` only: existing tables are left as they are
//! and nothing is versioned.

use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::infra::repositories::entities::{
    DepartmentEntity, EmployeeEntity, OrderItemEntity, TelephoneEntity,
};

/// Statements in foreign-key order: referenced tables first.
pub(crate) fn create_table_statements(schema: &Schema) -> Vec<TableCreateStatement> {
    vec![
        create_table(schema, DepartmentEntity),
        create_table(schema, EmployeeEntity),
        create_table(schema, TelephoneEntity),
        create_table(schema, OrderItemEntity),
    ]
}

fn create_table<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    stmt
}

pub(crate) async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    for stmt in create_table_statements(&schema) {
        db.execute(backend.build(&stmt)).await?;
    }

    tracing::info!("Database schema ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::db::testing::memory_database;
    use sea_orm::{DbBackend, Statement};

    #[test]
    fn tables_are_created_in_dependency_order() {
        let schema = Schema::new(DbBackend::Postgres);
        let sql: Vec<String> = create_table_statements(&schema)
            .iter()
            .map(|stmt| DbBackend::Postgres.build(stmt).to_string())
            .collect();

        assert_eq!(sql.len(), 4);
        assert!(sql[0].starts_with(r#"CREATE TABLE IF NOT EXISTS "departments""#));
        assert!(sql[1].starts_with(r#"CREATE TABLE IF NOT EXISTS "employees""#));
        assert!(sql[2].starts_with(r#"CREATE TABLE IF NOT EXISTS "telephones""#));
        assert!(sql[3].starts_with(r#"CREATE TABLE IF NOT EXISTS "order_items""#));
    }

    #[test]
    fn employees_reference_departments() {
        let schema = Schema::new(DbBackend::Postgres);
        let sql = DbBackend::Postgres
            .build(&create_table_statements(&schema)[1])
            .to_string();

        assert!(sql.contains(r#"FOREIGN KEY ("department_id") REFERENCES "departments" ("id")"#));
    }

    #[tokio::test]
    async fn employee_columns_are_required_except_phone_and_department() {
        let db = memory_database().await;
        let conn = db.connection();
        let insert = |columns: &str, values: &str| {
            Statement::from_string(
                conn.get_database_backend(),
                format!("INSERT INTO employees ({columns}) VALUES ({values})"),
            )
        };

        let minimal = conn
            .execute(insert(
                "first_name, last_name, email, hire_date, salary, contract_type",
                "'Leo', 'Martin', 'leo@example.com', '2023-09-15', 18500.0, 'INTERNSHIP'",
            ))
            .await;
        let without_hire_date = conn
            .execute(insert(
                "first_name, last_name, email, salary, contract_type",
                "'Ana', 'Garcia', 'ana@example.com', 42000.0, 'FULL_TIME'",
            ))
            .await;
        let without_salary = conn
            .execute(insert(
                "first_name, last_name, email, hire_date, contract_type",
                "'Iker', 'Ruiz', 'iker@example.com', '2022-06-20', 'PART_TIME'",
            ))
            .await;

        assert!(minimal.is_ok());
        assert!(without_hire_date.is_err());
        assert!(without_salary.is_err());
    }
}
