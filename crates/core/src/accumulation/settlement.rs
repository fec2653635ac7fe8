//! Liquidity settlement between the gold and stock funds.
//!
//! Each contribution cycle runs three steps in a fixed order:
//!
//! 1. **Repayment** - whichever debt is outstanding is paid down with all the
//!    cash the owing fund holds, capped by the debt.
//! 2. **Purchase** - gold is bought in whole minimum units. A remainder too
//!    small for another unit is swept into the stock fund as a stock-owes-gold
//!    debt. When gold cannot afford a single unit it may borrow the shortfall
//!    from the stock fund.
//! 3. **Direction lock** - a debt just repaid in a cycle cannot be recreated
//!    in that same cycle (no borrowing after gold repaid stock, no sweep after
//!    stock repaid gold).
//!
//! Every transfer is mirrored into the `gold`/`stocks` category allocations.

use log::debug;
use rust_decimal::Decimal;

use super::accumulation_model::FundBalances;
use crate::categories::CategoryAllocation;
use crate::constants::{GOLD_CATEGORY_ID, MIN_GOLD_UNIT, STOCK_CATEGORY_ID};
use crate::utils::{format_amount, format_units};

/// Result of one settlement cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementOutcome {
    /// Balances after depositing this cycle's allocations, before settlement.
    pub opening: FundBalances,
    /// Balances after settlement.
    pub closing: FundBalances,
    /// Narrative of the actions taken, empty if nothing happened.
    pub narrative: String,
    /// Quantity bought, in base denomination units.
    pub units_purchased: Decimal,
    pub purchase_cost: Decimal,
    pub gold_repaid_stock: bool,
    pub stock_repaid_gold: bool,
}

/// Runs one settlement cycle.
///
/// `previous` is the committed state; the gold and stock entries of
/// `allocations` are deposited into it and then adjusted in place as cash
/// moves between the funds. `unit_price` is the price of one base
/// denomination unit and must be positive.
pub fn settle(
    previous: FundBalances,
    allocations: &mut [CategoryAllocation],
    unit_price: Decimal,
) -> SettlementOutcome {
    let gold_alloc = allocation_amount(allocations, GOLD_CATEGORY_ID);
    let stock_alloc = allocation_amount(allocations, STOCK_CATEGORY_ID);

    let mut opening = previous;
    opening.gold_cash += gold_alloc;
    opening.stock_cash += stock_alloc;

    let mut cycle = Cycle {
        balances: opening,
        allocations,
        steps: Vec::new(),
        units_purchased: Decimal::ZERO,
        purchase_cost: Decimal::ZERO,
        gold_repaid_stock: false,
        stock_repaid_gold: false,
    };

    cycle.repay();
    cycle.purchase(unit_price * MIN_GOLD_UNIT);

    debug!(
        "Settled cycle: gold {} -> {}, stock {} -> {}, bought {} units",
        opening.gold_cash,
        cycle.balances.gold_cash,
        opening.stock_cash,
        cycle.balances.stock_cash,
        cycle.units_purchased
    );

    SettlementOutcome {
        opening,
        closing: cycle.balances,
        narrative: cycle.steps.join(" "),
        units_purchased: cycle.units_purchased,
        purchase_cost: cycle.purchase_cost,
        gold_repaid_stock: cycle.gold_repaid_stock,
        stock_repaid_gold: cycle.stock_repaid_gold,
    }
}

fn allocation_amount(allocations: &[CategoryAllocation], id: &str) -> Decimal {
    allocations
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.amount)
        .unwrap_or(Decimal::ZERO)
}

struct Cycle<'a> {
    balances: FundBalances,
    allocations: &'a mut [CategoryAllocation],
    steps: Vec<String>,
    units_purchased: Decimal,
    purchase_cost: Decimal,
    gold_repaid_stock: bool,
    stock_repaid_gold: bool,
}

impl Cycle<'_> {
    fn repay(&mut self) {
        let b = &mut self.balances;

        if b.gold_owes_stock > Decimal::ZERO {
            let amount = b.gold_owes_stock.min(b.gold_cash);
            if amount > Decimal::ZERO {
                b.gold_cash -= amount;
                b.stock_cash += amount;
                b.gold_owes_stock -= amount;
                self.gold_repaid_stock = true;
                self.steps
                    .push(format!("Repaid stock {}.", format_amount(amount)));
                self.shift_allocation(GOLD_CATEGORY_ID, STOCK_CATEGORY_ID, amount);
            }
        } else if b.stock_owes_gold > Decimal::ZERO {
            let amount = b.stock_owes_gold.min(b.stock_cash);
            if amount > Decimal::ZERO {
                b.stock_cash -= amount;
                b.gold_cash += amount;
                b.stock_owes_gold -= amount;
                self.stock_repaid_gold = true;
                self.steps.push(format!(
                    "Received stock repayment {}.",
                    format_amount(amount)
                ));
                self.shift_allocation(STOCK_CATEGORY_ID, GOLD_CATEGORY_ID, amount);
            }
        }
    }

    fn purchase(&mut self, price_per_min_unit: Decimal) {
        if price_per_min_unit <= Decimal::ZERO {
            return;
        }

        if self.balances.gold_cash >= price_per_min_unit {
            let units = (self.balances.gold_cash / price_per_min_unit).floor();
            self.buy(units, price_per_min_unit);

            if self.balances.gold_cash > Decimal::ZERO && !self.stock_repaid_gold {
                self.sweep_to_stock();
            }
            return;
        }

        let missing = price_per_min_unit - self.balances.gold_cash;
        if missing <= self.balances.stock_cash && !self.gold_repaid_stock {
            let b = &mut self.balances;
            b.stock_cash -= missing;
            b.gold_cash += missing;
            b.gold_owes_stock += missing;
            self.steps
                .push(format!("Borrowed {} from stock.", format_amount(missing)));
            self.shift_allocation(STOCK_CATEGORY_ID, GOLD_CATEGORY_ID, missing);

            self.buy(Decimal::ONE, price_per_min_unit);
        } else if self.balances.gold_cash > Decimal::ZERO && !self.stock_repaid_gold {
            self.sweep_to_stock();
        }
    }

    /// Buys `units` minimum units at `price_per_min_unit` each.
    fn buy(&mut self, units: Decimal, price_per_min_unit: Decimal) {
        let cost = units * price_per_min_unit;
        let quantity = units * MIN_GOLD_UNIT;

        self.balances.gold_cash -= cost;
        self.units_purchased += quantity;
        self.purchase_cost += cost;
        self.steps
            .push(format!("Bought {} chi.", format_units(quantity)));
    }

    /// Moves all remaining gold cash to the stock fund, which then owes it back.
    fn sweep_to_stock(&mut self) {
        let b = &mut self.balances;
        let amount = b.gold_cash;

        b.gold_cash = Decimal::ZERO;
        b.stock_cash += amount;
        b.stock_owes_gold += amount;
        self.steps
            .push(format!("Moved {} to stock.", format_amount(amount)));
        self.shift_allocation(GOLD_CATEGORY_ID, STOCK_CATEGORY_ID, amount);
    }

    fn shift_allocation(&mut self, from: &str, to: &str, amount: Decimal) {
        for allocation in self.allocations.iter_mut() {
            if allocation.id == from {
                allocation.amount -= amount;
            } else if allocation.id == to {
                allocation.amount += amount;
            }
        }
    }
}
