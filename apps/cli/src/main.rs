mod cli;
mod commands;
mod config;
mod main_lib;
mod render;

use clap::Parser;

use cli::{Cli, Command};
use config::Config;
use main_lib::{build_price_oracle, build_service, init_tracing, load_categories};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();
    let config = Config::from_env()?;

    let price_oracle = build_price_oracle(&config);
    let service = build_service(&config, price_oracle.clone())?;
    tracing::debug!("Ledger database: {}", config.db_path);

    match cli.command {
        Command::Propose { amount, yes } => {
            let categories = load_categories(config.categories_file.as_deref())?;
            commands::propose(&service, amount, &categories, yes, cli.json).await
        }
        Command::History => commands::history(&service, cli.json).await,
        Command::State => commands::state(&service, cli.json).await,
        Command::Reset { yes } => commands::reset(&service, yes).await,
        Command::Simulate { amount, months } => {
            let categories = load_categories(config.categories_file.as_deref())?;
            commands::simulation(
                &service,
                price_oracle,
                amount,
                months,
                &categories,
                cli.json,
            )
            .await
        }
    }
}
