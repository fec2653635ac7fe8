//! Plain-text views of proposals, state and simulations.

use std::fmt::Write;

use accrue_core::utils::{format_amount, format_units};
use accrue_core::{Category, FundBalances, LedgerState, SimulationRow, Transaction};

pub fn proposal(transaction: &Transaction, categories: &[Category]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Contribution {} at {} per chi",
        format_amount(transaction.monthly_amount),
        format_amount(transaction.unit_price)
    );
    let _ = writeln!(out);
    for allocation in &transaction.allocations {
        let _ = writeln!(
            out,
            "  {:<24} {:>6}%  {:>16}",
            allocation.name,
            allocation.percentage.normalize(),
            format_amount(allocation.amount)
        );
        if let Some(category) = categories.iter().find(|c| c.id == allocation.id) {
            for sub in allocation.sub_allocations(category) {
                let _ = writeln!(
                    out,
                    "    - {:<20} {:>6}%  {:>16}",
                    sub.name,
                    sub.percentage.normalize(),
                    format_amount(sub.amount)
                );
            }
        }
    }
    let _ = writeln!(out);
    if !transaction.action_narrative.is_empty() {
        let _ = writeln!(out, "{}", transaction.action_narrative);
    }
    let _ = writeln!(
        out,
        "Gold bought: {} chi for {}",
        format_units(transaction.units_purchased),
        format_amount(transaction.purchase_cost)
    );
    out.push_str(&balances(&transaction.balances_after()));
    out
}

pub fn balances(balances: &FundBalances) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Gold cash:        {}", format_amount(balances.gold_cash));
    let _ = writeln!(out, "Stock cash:       {}", format_amount(balances.stock_cash));
    let _ = writeln!(
        out,
        "Gold owes stock:  {}",
        format_amount(balances.gold_owes_stock)
    );
    let _ = writeln!(
        out,
        "Stock owes gold:  {}",
        format_amount(balances.stock_owes_gold)
    );
    out
}

pub fn history(state: &LedgerState) -> String {
    if state.history.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut out = String::new();
    for transaction in &state.history {
        let _ = writeln!(
            out,
            "{}  {:>16}  {:>6} chi  {}",
            transaction.date.format("%Y-%m-%d"),
            format_amount(transaction.monthly_amount),
            format_units(transaction.units_purchased),
            transaction.action_narrative
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total contributed: {}",
        format_amount(state.total_contributed())
    );
    let _ = writeln!(
        out,
        "Total gold:        {} chi for {}",
        format_units(state.total_units_purchased()),
        format_amount(state.total_purchase_cost())
    );
    out
}

pub fn simulation(rows: &[SimulationRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "Month {:>3}: gold {} / stock {} -> bought {} chi, gold {} / stock {}",
            row.month,
            format_amount(row.gold_cash_start),
            format_amount(row.stock_cash_start),
            format_units(row.units_purchased),
            format_amount(row.gold_cash_end),
            format_amount(row.stock_cash_end)
        );
        if !row.action_narrative.is_empty() {
            let _ = writeln!(out, "           {}", row.action_narrative);
        }
    }
    out
}
