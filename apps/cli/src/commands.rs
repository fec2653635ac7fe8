use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::bail;
use rust_decimal::Decimal;

use accrue_core::pricing::PriceOracle;
use accrue_core::{
    simulate, AccumulationService, AccumulationServiceTrait, Category, ResetConfirmation,
};

use crate::render;

pub async fn propose(
    service: &AccumulationService,
    amount: Decimal,
    categories: &[Category],
    yes: bool,
    json: bool,
) -> anyhow::Result<()> {
    let Some(proposal) = service.calculate_proposal(amount, categories).await? else {
        bail!("Proposal request was superseded");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&proposal)?);
    } else {
        print!("{}", render::proposal(&proposal, categories));
    }

    if yes || ask("Commit this transaction?")? {
        service.confirm_transaction().await?;
        tracing::info!("Committed transaction {}", proposal.id);
        if !json {
            println!("Saved.");
        }
    } else {
        service.clear_proposal();
        if !json {
            println!("Discarded.");
        }
    }
    Ok(())
}

pub async fn history(service: &AccumulationService, json: bool) -> anyhow::Result<()> {
    let state = service.state().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&state.history)?);
    } else {
        print!("{}", render::history(&state));
    }
    Ok(())
}

pub async fn state(service: &AccumulationService, json: bool) -> anyhow::Result<()> {
    let state = service.state().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&state.balances())?);
    } else {
        print!("{}", render::balances(&state.balances()));
    }
    Ok(())
}

pub async fn reset(service: &AccumulationService, yes: bool) -> anyhow::Result<()> {
    let confirmation =
        ResetConfirmation::from(yes || ask("Erase all balances, debts and history?")?);
    if confirmation == ResetConfirmation::Declined {
        println!("Reset cancelled.");
        return Ok(());
    }

    service.reset_state(confirmation).await?;
    println!("Ledger cleared.");
    Ok(())
}

pub async fn simulation(
    service: &AccumulationService,
    price_oracle: Arc<dyn PriceOracle>,
    amount: Decimal,
    months: u32,
    categories: &[Category],
    json: bool,
) -> anyhow::Result<()> {
    let quote = price_oracle.latest_price().await?;
    let start = service.state().await;
    let rows = simulate(&start, months, amount, categories, quote.price_per_unit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render::simulation(&rows));
    }
    Ok(())
}

fn ask(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrue_core::InMemoryLedgerStore;
    use accrue_market_data::FixedPriceOracle;
    use rust_decimal_macros::dec;

    fn service() -> AccumulationService {
        AccumulationService::load(
            Arc::new(InMemoryLedgerStore::new()),
            Arc::new(FixedPriceOracle::new(dec!(3460000))),
        )
        .unwrap()
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }

    #[tokio::test]
    async fn test_propose_with_yes_commits() {
        let service = service();
        let categories = vec![
            Category::new("stocks", "Stocks", dec!(30)),
            Category::new("gold", "Gold", dec!(20)),
        ];

        propose(&service, dec!(10000000), &categories, true, true)
            .await
            .unwrap();

        let state = service.state().await;
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.stock_owes_gold, dec!(270000));
        assert!(service.pending_proposal().is_none());
    }

    #[tokio::test]
    async fn test_confirmed_reset_clears_ledger() {
        let service = service();
        let categories = vec![Category::new("gold", "Gold", dec!(100))];
        propose(&service, dec!(10000000), &categories, true, true)
            .await
            .unwrap();

        reset(&service, true).await.unwrap();

        assert!(service.state().await.history.is_empty());
    }
}
