//! Accumulation module - settlement protocol, proposals, ledger and the
//! session service.

mod accumulation_model;
mod accumulation_service;
mod accumulation_traits;
mod ledger;
mod ledger_store;
mod proposal;
mod settlement;
mod simulation;

pub use accumulation_model::{FundBalances, LedgerState, ResetConfirmation, Transaction};
pub use accumulation_service::AccumulationService;
pub use accumulation_traits::{AccumulationServiceTrait, LedgerStore};
pub use ledger::{decode_state, encode_state, Ledger};
pub use ledger_store::InMemoryLedgerStore;
pub use proposal::{build_proposal, compute_proposal};
pub use settlement::{settle, SettlementOutcome};
pub use simulation::{simulate, SimulationRow};
