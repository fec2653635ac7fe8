//! Builds candidate transactions from a contribution and the committed state.

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::accumulation_model::{FundBalances, LedgerState, Transaction};
use super::settlement::settle;
use crate::categories::{allocate, validate_categories, validate_contribution, Category};
use crate::constants::{MAX_BALANCE, MIN_UNIT_PRICE};
use crate::errors::{Error, Result};

/// Computes a proposal stamped with the current time.
pub fn compute_proposal(
    state: &LedgerState,
    amount: Decimal,
    categories: &[Category],
    unit_price: Decimal,
) -> Result<Transaction> {
    build_proposal(state, amount, categories, unit_price, Utc::now())
}

/// Computes a candidate transaction without touching `state`.
///
/// The candidate's `*_after` fields are the settlement's closing balances and
/// its allocations are the post-settlement amounts.
pub fn build_proposal(
    state: &LedgerState,
    amount: Decimal,
    categories: &[Category],
    unit_price: Decimal,
    created_at: DateTime<Utc>,
) -> Result<Transaction> {
    validate_contribution(amount)?;
    validate_categories(categories)?;
    validate_cycle_inputs(&state.balances(), unit_price)?;

    let mut allocations = allocate(amount, categories);
    debug!(
        "Allocated {} across {} categories",
        amount,
        allocations.len()
    );

    let outcome = settle(state.balances(), &mut allocations, unit_price);
    let closing = outcome.closing;

    Ok(Transaction {
        id: Uuid::now_v7().to_string(),
        date: created_at,
        monthly_amount: amount,
        unit_price,
        action_narrative: outcome.narrative,
        units_purchased: outcome.units_purchased,
        purchase_cost: outcome.purchase_cost,
        gold_owes_stock_after: closing.gold_owes_stock,
        stock_owes_gold_after: closing.stock_owes_gold,
        gold_cash_after: closing.gold_cash,
        stock_cash_after: closing.stock_cash,
        allocations,
    })
}

/// Checks the starting balances and the unit price of a cycle.
///
/// Together with the contribution ceiling these bounds keep every settlement
/// step inside `Decimal` range.
pub(crate) fn validate_cycle_inputs(balances: &FundBalances, unit_price: Decimal) -> Result<()> {
    if unit_price <= Decimal::ZERO {
        return Err(Error::PriceUnavailable(format!(
            "unit price must be positive, got {}",
            unit_price
        )));
    }
    if unit_price < MIN_UNIT_PRICE || unit_price > MAX_BALANCE {
        return Err(Error::PriceUnavailable(format!(
            "unit price {} is outside {} to {}",
            unit_price, MIN_UNIT_PRICE, MAX_BALANCE
        )));
    }

    let largest = [
        balances.gold_cash,
        balances.stock_cash,
        balances.gold_owes_stock,
        balances.stock_owes_gold,
    ]
    .into_iter()
    .max()
    .unwrap_or(Decimal::ZERO);
    if largest > MAX_BALANCE {
        return Err(Error::invalid_input(format!(
            "fund balance {} exceeds the maximum of {}",
            largest, MAX_BALANCE
        )));
    }
    Ok(())
}
