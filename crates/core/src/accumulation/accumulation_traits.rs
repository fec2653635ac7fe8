use async_trait::async_trait;
use rust_decimal::Decimal;

use super::accumulation_model::{LedgerState, ResetConfirmation, Transaction};
use crate::categories::Category;
use crate::errors::Result;

/// Key-value persistence for the serialized ledger state.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Returns the blob stored under `key`, or `None` if nothing was saved.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous blob.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Trait for accumulation service operations
#[async_trait]
pub trait AccumulationServiceTrait: Send + Sync {
    /// Current committed state.
    async fn state(&self) -> LedgerState;

    /// Fetches the price and computes a new pending proposal.
    ///
    /// Returns `Ok(None)` when a newer request (or a clear) started while
    /// this one was waiting on the price oracle.
    async fn calculate_proposal(
        &self,
        amount: Decimal,
        categories: &[Category],
    ) -> Result<Option<Transaction>>;

    fn pending_proposal(&self) -> Option<Transaction>;

    /// Drops the pending proposal and discards any in-flight computation.
    fn clear_proposal(&self);

    /// Commits the pending proposal.
    async fn confirm_transaction(&self) -> Result<LedgerState>;

    /// Wipes balances and history.
    async fn reset_state(&self, confirmation: ResetConfirmation) -> Result<()>;
}
