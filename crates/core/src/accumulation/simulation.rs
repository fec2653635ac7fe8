//! Multi-month projection of the settlement protocol at a fixed price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accumulation_model::{FundBalances, LedgerState};
use super::proposal::validate_cycle_inputs;
use super::settlement::settle;
use crate::categories::{
    allocate, validate_categories, validate_contribution, Category, CategoryAllocation,
};
use crate::constants::MAX_SIMULATION_MONTHS;
use crate::errors::{Error, Result};

/// One projected contribution cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRow {
    /// 1-based cycle number.
    pub month: u32,
    /// Gold cash after this month's allocation, before settlement.
    pub gold_cash_start: Decimal,
    /// Stock cash after this month's allocation, before settlement.
    pub stock_cash_start: Decimal,
    pub action_narrative: String,
    pub units_purchased: Decimal,
    pub purchase_cost: Decimal,
    pub gold_cash_end: Decimal,
    pub stock_cash_end: Decimal,
    pub gold_owes_stock: Decimal,
    pub stock_owes_gold: Decimal,
    pub allocations: Vec<CategoryAllocation>,
}

/// Runs `months` consecutive cycles starting from `start`.
///
/// Nothing is persisted; `start` is only read. At most
/// [`MAX_SIMULATION_MONTHS`] cycles are projected.
pub fn simulate(
    start: &LedgerState,
    months: u32,
    amount: Decimal,
    categories: &[Category],
    unit_price: Decimal,
) -> Result<Vec<SimulationRow>> {
    validate_contribution(amount)?;
    validate_categories(categories)?;
    validate_cycle_inputs(&start.balances(), unit_price)?;
    if months > MAX_SIMULATION_MONTHS {
        return Err(Error::invalid_input(format!(
            "cannot simulate {} months, the maximum is {}",
            months, MAX_SIMULATION_MONTHS
        )));
    }

    let mut balances: FundBalances = start.balances();
    let mut rows = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let mut allocations = allocate(amount, categories);
        let outcome = settle(balances, &mut allocations, unit_price);
        balances = outcome.closing;

        rows.push(SimulationRow {
            month,
            gold_cash_start: outcome.opening.gold_cash,
            stock_cash_start: outcome.opening.stock_cash,
            action_narrative: outcome.narrative,
            units_purchased: outcome.units_purchased,
            purchase_cost: outcome.purchase_cost,
            gold_cash_end: balances.gold_cash,
            stock_cash_end: balances.stock_cash,
            gold_owes_stock: balances.gold_owes_stock,
            stock_owes_gold: balances.stock_owes_gold,
            allocations,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GOLD_CATEGORY_ID, STOCK_CATEGORY_ID};
    use rust_decimal_macros::dec;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(STOCK_CATEGORY_ID, "Stocks", dec!(20)),
            Category::new(GOLD_CATEGORY_ID, "Gold", dec!(20)),
        ]
    }

    #[test]
    fn test_simulation_runs_requested_months() {
        let rows = simulate(
            &LedgerState::default(),
            12,
            dec!(5000000),
            &categories(),
            dec!(3460000),
        )
        .unwrap();

        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].month, 1);
        assert_eq!(rows[11].month, 12);
        for row in &rows {
            assert!(row.gold_owes_stock.is_zero() || row.stock_owes_gold.is_zero());
            assert!(row.gold_cash_end >= Decimal::ZERO);
            assert!(row.stock_cash_end >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_simulation_carries_state_between_months() {
        // Gold gets 1,000,000 per month; one unit costs 1,730,000.
        let rows = simulate(
            &LedgerState::default(),
            2,
            dec!(5000000),
            &categories(),
            dec!(3460000),
        )
        .unwrap();

        // Month 1: borrow 730,000 from stock and buy one unit.
        assert_eq!(rows[0].units_purchased, dec!(0.5));
        assert_eq!(rows[0].gold_owes_stock, dec!(730000));
        assert_eq!(rows[0].stock_cash_end, dec!(270000));

        // Month 2: repay the debt, then 270,000 is too little and is swept.
        assert_eq!(rows[1].gold_cash_start, dec!(1000000));
        assert_eq!(rows[1].gold_owes_stock, Decimal::ZERO);
        assert_eq!(rows[1].units_purchased, Decimal::ZERO);
        assert_eq!(rows[1].stock_owes_gold, dec!(270000));
        assert_eq!(rows[1].stock_cash_end, dec!(2270000));
    }

    #[test]
    fn test_simulation_does_not_modify_start_state() {
        let start = LedgerState {
            stock_owes_gold: dec!(100000),
            stock_cash: dec!(100000),
            ..Default::default()
        };
        let before = start.clone();

        simulate(&start, 3, dec!(5000000), &categories(), dec!(3460000)).unwrap();

        assert_eq!(start, before);
    }

    #[test]
    fn test_rejects_too_many_months() {
        let err = simulate(
            &LedgerState::default(),
            4_000_000_000,
            dec!(5000000),
            &categories(),
            dec!(3460000),
        )
        .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_longest_simulation_at_largest_contribution_stays_in_range() {
        let rows = simulate(
            &LedgerState::default(),
            MAX_SIMULATION_MONTHS,
            crate::constants::MAX_CONTRIBUTION,
            &categories(),
            dec!(3460000),
        )
        .unwrap();

        assert_eq!(rows.len(), MAX_SIMULATION_MONTHS as usize);
    }

    #[test]
    fn test_zero_months_yields_no_rows() {
        let rows = simulate(
            &LedgerState::default(),
            0,
            dec!(5000000),
            &categories(),
            dec!(3460000),
        )
        .unwrap();
        assert!(rows.is_empty());
    }
}
