use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::str::FromStr;

use accrue_core::constants::{DEFAULT_SIMULATION_MONTHS, MAX_SIMULATION_MONTHS};

#[derive(Debug, Parser)]
#[command(name = "accrue", version, about = "Monthly gold and stock accumulation planner")]
pub struct Cli {
    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute this month's proposal and optionally commit it
    Propose {
        /// Monthly contribution, e.g. 10,000,000
        #[arg(long, value_parser = parse_amount)]
        amount: Decimal,
        /// Commit without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// List committed transactions, newest first
    History,
    /// Show current balances and debts
    State,
    /// Erase all balances, debts and history
    Reset {
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Project the next months at today's price without saving anything
    Simulate {
        #[arg(long, value_parser = parse_amount)]
        amount: Decimal,
        #[arg(
            long,
            default_value_t = DEFAULT_SIMULATION_MONTHS,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SIMULATION_MONTHS))
        )]
        months: u32,
    },
}

/// Accepts `,` and `_` as digit group separators.
fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && *c != '_' && !c.is_whitespace())
        .collect();
    let amount = Decimal::from_str(&cleaned).map_err(|e| format!("invalid amount: {}", e))?;
    if amount <= Decimal::ZERO {
        return Err("amount must be positive".to_string());
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_amount_accepts_separators() {
        assert_eq!(parse_amount("10,000,000"), Ok(dec!(10000000)));
        assert_eq!(parse_amount("1_500_000"), Ok(dec!(1500000)));
        assert_eq!(parse_amount("2500000.5"), Ok(dec!(2500000.5)));
    }

    #[test]
    fn test_parse_amount_rejects_non_positive() {
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-10").is_err());
        assert!(parse_amount("lots").is_err());
    }

    #[test]
    fn test_simulate_defaults_to_twelve_months() {
        let cli = Cli::try_parse_from(["accrue", "simulate", "--amount", "5000000"]).unwrap();
        match cli.command {
            Command::Simulate { amount, months } => {
                assert_eq!(amount, dec!(5000000));
                assert_eq!(months, 12);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_simulate_rejects_months_out_of_range() {
        for months in ["0", "601", "4000000000"] {
            let parsed =
                Cli::try_parse_from(["accrue", "simulate", "--amount", "5000000", "--months", months]);
            assert!(parsed.is_err(), "accepted --months {}", months);
        }
        assert!(
            Cli::try_parse_from(["accrue", "simulate", "--amount", "5000000", "--months", "600"])
                .is_ok()
        );
    }

    #[test]
    fn test_propose_with_yes_flag() {
        let cli =
            Cli::try_parse_from(["accrue", "propose", "--amount", "10,000,000", "-y", "--json"])
                .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Propose { yes: true, .. }));
    }
}
