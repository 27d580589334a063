//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and owns the transaction lifecycle. Reads
//! that must see one snapshot run through [`UnitOfWork::read_only`], which
//! opens a read-only transaction, hands a [`TransactionContext`] to the
//! closure and commits or rolls back when it returns.

use async_trait::async_trait;
use futures::future::BoxFuture;
use sea_orm::{AccessMode, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;

use super::repositories::{
    select_basic_information, select_basic_information_page, EmployeeDetailRepository,
    EmployeeDetailStore, EmployeeRepository, EmployeeStore,
};
use crate::domain::BasicEmployeeInformation;
use crate::errors::{AppError, AppResult};
use crate::types::{Page, PageRequest};

/// Unit of Work trait for dependency injection.
///
/// Not mockable with `automock` because of the generic method; tests
/// provide a small hand-written implementation instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Pool-backed employee repository
    fn employees(&self) -> Arc<dyn EmployeeRepository>;

    /// Pool-backed detail view repository
    fn employee_details(&self) -> Arc<dyn EmployeeDetailRepository>;

    /// Execute a closure within a read-only transaction.
    ///
    /// The access mode is a hint to the store; the transaction is committed
    /// on success and rolled back on error.
    async fn read_only<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> BoxFuture<'a, AppResult<T>> + Send,
        T: Send;
}

/// Repository access bound to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Employee repository for this transaction
    pub fn employees(&self) -> TxEmployeeRepository<'a> {
        TxEmployeeRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    employee_repo: Arc<EmployeeStore>,
    employee_detail_repo: Arc<EmployeeDetailStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        let employee_repo = Arc::new(EmployeeStore::new(db.clone()));
        let employee_detail_repo = Arc::new(EmployeeDetailStore::new(db.clone()));
        Self {
            db,
            employee_repo,
            employee_detail_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }

    fn employee_details(&self) -> Arc<dyn EmployeeDetailRepository> {
        self.employee_detail_repo.clone()
    }

    async fn read_only<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> BoxFuture<'a, AppResult<T>> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(None, Some(AccessMode::ReadOnly))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Employee projections executed on a borrowed transaction.
pub struct TxEmployeeRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxEmployeeRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl EmployeeRepository for TxEmployeeRepository<'_> {
    async fn find_basic_information(&self) -> AppResult<Vec<BasicEmployeeInformation>> {
        select_basic_information(self.txn).await
    }

    async fn find_basic_information_page(
        &self,
        request: PageRequest,
    ) -> AppResult<Page<BasicEmployeeInformation>> {
        select_basic_information_page(self.txn, request).await
    }
}
