//! The ledger: committed balances, debts and history, backed by a store.

use std::sync::Arc;

use log::{error, info, warn};

use super::accumulation_model::{LedgerState, ResetConfirmation, Transaction};
use super::accumulation_traits::LedgerStore;
use crate::constants::LEDGER_STATE_KEY;
use crate::errors::{Error, Result};

/// Decodes a stored ledger blob.
///
/// Blobs that fail to parse or hold negative balances or two-way debts are
/// reported as `CorruptPersistedState`.
pub fn decode_state(blob: &str) -> Result<LedgerState> {
    let state: LedgerState = serde_json::from_str(blob)?;
    if !state.balances().is_consistent() {
        return Err(Error::CorruptPersistedState(
            "balances are negative or debts point both ways".to_string(),
        ));
    }
    Ok(state)
}

pub fn encode_state(state: &LedgerState) -> Result<String> {
    serde_json::to_string(state).map_err(|e| Error::Unexpected(e.to_string()))
}

/// Append-only history of committed transactions plus the running balances.
pub struct Ledger {
    store: Arc<dyn LedgerStore>,
    state: LedgerState,
}

impl Ledger {
    /// Reads the persisted state, falling back to the default state when the
    /// blob is missing or corrupt. Store read failures are returned.
    pub fn load(store: Arc<dyn LedgerStore>) -> Result<Self> {
        let state = match store.get(LEDGER_STATE_KEY)? {
            None => LedgerState::default(),
            Some(blob) => match decode_state(&blob) {
                Ok(state) => state,
                Err(e) => {
                    warn!("Discarding stored ledger state: {}", e);
                    LedgerState::default()
                }
            },
        };

        info!(
            "Loaded ledger with {} committed transactions",
            state.history.len()
        );
        Ok(Self { store, state })
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Commits `candidate`: balances take its `*_after` values and it is
    /// prepended to history.
    ///
    /// The new state is persisted before it replaces the in-memory one, so a
    /// failure leaves the ledger unchanged.
    pub async fn commit(&mut self, candidate: Transaction) -> Result<&LedgerState> {
        if self.state.contains_transaction(&candidate.id) {
            return Err(Error::PreconditionFailed(format!(
                "transaction {} is already committed",
                candidate.id
            )));
        }
        if !candidate.balances_after().is_consistent() {
            return Err(Error::PreconditionFailed(format!(
                "transaction {} has inconsistent balances",
                candidate.id
            )));
        }

        let next = self.state.applied(&candidate);
        self.persist(&next).await?;
        self.state = next;

        info!(
            "Committed transaction {}: bought {} for {}",
            candidate.id, candidate.units_purchased, candidate.purchase_cost
        );
        Ok(&self.state)
    }

    /// Restores the zeroed default state and clears history.
    pub async fn reset(&mut self, confirmation: ResetConfirmation) -> Result<()> {
        if confirmation != ResetConfirmation::Confirmed {
            return Err(Error::PreconditionFailed(
                "ledger reset requires explicit confirmation".to_string(),
            ));
        }

        let next = LedgerState::default();
        self.persist(&next).await?;
        self.state = next;

        info!("Ledger reset to default state");
        Ok(())
    }

    async fn persist(&self, state: &LedgerState) -> Result<()> {
        let blob = encode_state(state)?;
        self.store
            .set(LEDGER_STATE_KEY, &blob)
            .await
            .inspect_err(|e| error!("Failed to persist ledger state: {}", e))
    }
}
