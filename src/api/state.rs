//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, Persistence};
use crate::services::{EmployeeManager, EmployeeService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Employee read service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the services on top of an open database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let uow = Arc::new(Persistence::new(database.get_connection()));
        let employee_service = Arc::new(EmployeeManager::new(uow));

        Self {
            employee_service,
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(employee_service: Arc<dyn EmployeeService>, database: Arc<Database>) -> Self {
        Self {
            employee_service,
            database,
        }
    }
}
