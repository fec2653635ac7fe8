//! Accumulation domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::CategoryAllocation;

/// Cash and debts of the two funds that share liquidity.
///
/// This is the working copy the settlement protocol mutates. At most one of
/// the two debts is nonzero in any committed state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FundBalances {
    /// Pending cash in the gold fund.
    pub gold_cash: Decimal,
    /// Pending cash in the stock fund.
    pub stock_cash: Decimal,
    /// Amount the gold fund must return to the stock fund.
    pub gold_owes_stock: Decimal,
    /// Amount the stock fund must return to the gold fund.
    pub stock_owes_gold: Decimal,
}

impl FundBalances {
    /// True when no balance is negative and debts do not point both ways.
    pub fn is_consistent(&self) -> bool {
        self.gold_cash >= Decimal::ZERO
            && self.stock_cash >= Decimal::ZERO
            && self.gold_owes_stock >= Decimal::ZERO
            && self.stock_owes_gold >= Decimal::ZERO
            && (self.gold_owes_stock.is_zero() || self.stock_owes_gold.is_zero())
    }
}

/// A single contribution cycle, immutable once created.
///
/// Produced as a candidate by the proposal builder and made permanent when
/// the ledger commits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Time-ordered unique id.
    pub id: String,
    pub date: DateTime<Utc>,
    pub monthly_amount: Decimal,
    /// Price per base denomination unit (one chi) used for this cycle.
    #[serde(alias = "goldPrice")]
    pub unit_price: Decimal,
    /// What the settlement did, empty if nothing happened.
    #[serde(alias = "action")]
    pub action_narrative: String,
    /// Quantity bought, in base denomination units.
    #[serde(alias = "goldBought")]
    pub units_purchased: Decimal,
    #[serde(alias = "goldCost")]
    pub purchase_cost: Decimal,
    pub gold_owes_stock_after: Decimal,
    pub stock_owes_gold_after: Decimal,
    pub gold_cash_after: Decimal,
    pub stock_cash_after: Decimal,
    /// Post-settlement amounts per category.
    #[serde(default)]
    pub allocations: Vec<CategoryAllocation>,
}

impl Transaction {
    /// Fund balances after this transaction.
    pub fn balances_after(&self) -> FundBalances {
        FundBalances {
            gold_cash: self.gold_cash_after,
            stock_cash: self.stock_cash_after,
            gold_owes_stock: self.gold_owes_stock_after,
            stock_owes_gold: self.stock_owes_gold_after,
        }
    }
}

/// Persisted running balances, debts and committed history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerState {
    pub gold_owes_stock: Decimal,
    pub stock_owes_gold: Decimal,
    pub gold_cash: Decimal,
    pub stock_cash: Decimal,
    /// Committed transactions, newest first.
    pub history: Vec<Transaction>,
}

impl LedgerState {
    pub fn balances(&self) -> FundBalances {
        FundBalances {
            gold_cash: self.gold_cash,
            stock_cash: self.stock_cash,
            gold_owes_stock: self.gold_owes_stock,
            stock_owes_gold: self.stock_owes_gold,
        }
    }

    /// Returns the state that results from committing `transaction`.
    ///
    /// Balances are replaced by the transaction's `*_after` fields and the
    /// transaction is prepended to history.
    pub fn applied(&self, transaction: &Transaction) -> LedgerState {
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.push(transaction.clone());
        history.extend(self.history.iter().cloned());

        LedgerState {
            gold_owes_stock: transaction.gold_owes_stock_after,
            stock_owes_gold: transaction.stock_owes_gold_after,
            gold_cash: transaction.gold_cash_after,
            stock_cash: transaction.stock_cash_after,
            history,
        }
    }

    pub fn contains_transaction(&self, transaction_id: &str) -> bool {
        self.history.iter().any(|t| t.id == transaction_id)
    }

    pub fn total_units_purchased(&self) -> Decimal {
        self.history.iter().map(|t| t.units_purchased).sum()
    }

    pub fn total_purchase_cost(&self) -> Decimal {
        self.history.iter().map(|t| t.purchase_cost).sum()
    }

    pub fn total_contributed(&self) -> Decimal {
        self.history.iter().map(|t| t.monthly_amount).sum()
    }
}

/// Explicit acknowledgement required before wiping the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetConfirmation {
    Confirmed,
    Declined,
}

impl From<bool> for ResetConfirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            ResetConfirmation::Confirmed
        } else {
            ResetConfirmation::Declined
        }
    }
}
