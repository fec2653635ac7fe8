use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use super::accumulation_model::{LedgerState, ResetConfirmation, Transaction};
use super::accumulation_traits::{AccumulationServiceTrait, LedgerStore};
use super::ledger::Ledger;
use super::proposal::compute_proposal;
use crate::categories::{validate_categories, validate_contribution, Category};
use crate::errors::{Error, Result};
use crate::pricing::PriceOracle;

/// One user session: the ledger, the price source and the pending proposal.
///
/// Proposal requests follow last-request-wins: each request takes a new
/// generation number and its result is dropped if another request (or a
/// clear) started while it was waiting on the price oracle.
pub struct AccumulationService {
    ledger: Mutex<Ledger>,
    price_oracle: Arc<dyn PriceOracle>,
    pending: RwLock<Option<Transaction>>,
    generation: AtomicU64,
}

impl AccumulationService {
    pub fn new(ledger: Ledger, price_oracle: Arc<dyn PriceOracle>) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            price_oracle,
            pending: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Loads the ledger from `store` and builds the service around it.
    pub fn load(store: Arc<dyn LedgerStore>, price_oracle: Arc<dyn PriceOracle>) -> Result<Self> {
        Ok(Self::new(Ledger::load(store)?, price_oracle))
    }

    /// Starts a new request generation and drops the pending proposal.
    ///
    /// The generation only changes while the `pending` lock is held, so a
    /// publish cannot slip in between the bump and the clear.
    pub(super) fn begin_request(&self) -> u64 {
        let mut pending = self.pending.write().unwrap_or_else(|e| e.into_inner());
        *pending = None;
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_superseded(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != ticket
    }

    /// Stores `proposal` as pending unless `ticket` has been superseded.
    /// Returns whether it was stored.
    pub(super) fn publish(&self, ticket: u64, proposal: Transaction) -> bool {
        let mut pending = self.pending.write().unwrap_or_else(|e| e.into_inner());
        if self.is_superseded(ticket) {
            return false;
        }
        *pending = Some(proposal);
        true
    }

    fn take_pending(&self) -> Option<Transaction> {
        let mut pending = self.pending.write().unwrap_or_else(|e| e.into_inner());
        pending.take()
    }

    /// Puts back a proposal whose commit failed, unless a newer one exists.
    fn restore_pending(&self, proposal: Transaction) {
        let mut pending = self.pending.write().unwrap_or_else(|e| e.into_inner());
        if pending.is_none() {
            *pending = Some(proposal);
        }
    }
}

#[async_trait]
impl AccumulationServiceTrait for AccumulationService {
    async fn state(&self) -> LedgerState {
        self.ledger.lock().await.state().clone()
    }

    async fn calculate_proposal(
        &self,
        amount: Decimal,
        categories: &[Category],
    ) -> Result<Option<Transaction>> {
        let ticket = self.begin_request();

        validate_contribution(amount)?;
        validate_categories(categories)?;

        let quote = self.price_oracle.latest_price().await;
        if self.is_superseded(ticket) {
            debug!("Discarding superseded proposal request {}", ticket);
            return Ok(None);
        }
        let quote = quote?;
        debug!(
            "Using price {} per unit from {}",
            quote.price_per_unit, quote.source
        );

        let state = self.ledger.lock().await.state().clone();
        let proposal = compute_proposal(&state, amount, categories, quote.price_per_unit)?;

        if !self.publish(ticket, proposal.clone()) {
            debug!("Discarding superseded proposal request {}", ticket);
            return Ok(None);
        }
        Ok(Some(proposal))
    }

    fn pending_proposal(&self) -> Option<Transaction> {
        self.pending
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn clear_proposal(&self) {
        self.begin_request();
    }

    async fn confirm_transaction(&self) -> Result<LedgerState> {
        let proposal = self.take_pending().ok_or_else(|| {
            Error::PreconditionFailed("no pending proposal to confirm".to_string())
        })?;

        let mut ledger = self.ledger.lock().await;
        match ledger.commit(proposal.clone()).await {
            Ok(state) => Ok(state.clone()),
            Err(e) => {
                self.restore_pending(proposal);
                Err(e)
            }
        }
    }

    async fn reset_state(&self, confirmation: ResetConfirmation) -> Result<()> {
        self.ledger.lock().await.reset(confirmation).await?;
        self.clear_proposal();
        info!("Accumulation state cleared");
        Ok(())
    }
}
