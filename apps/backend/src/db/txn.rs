use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::warn;

use crate::errors::domain::DomainError;
use crate::trace_ctx;

/// Execute a function within a database transaction.
///
/// Commits on `Ok`, rolls back on `Err`. The closure receives the
/// transaction by reference and must return a boxed future borrowing it.
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, DomainError>
where
    R: Send,
    F: for<'c> FnOnce(
            &'c DatabaseTransaction,
        ) -> Pin<Box<dyn Future<Output = Result<R, DomainError>> + Send + 'c>>
        + Send,
{
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rollback_err) = txn.rollback().await {
                warn!(
                    trace_id = %trace_ctx::trace_id(),
                    error = %rollback_err,
                    "Transaction rollback failed"
                );
            }
            Err(err)
        }
    }
}
