use clap::Parser;
use colored::Colorize;
use tracing::error;

use edge_airdrop_checker::checker::Checker;
use edge_airdrop_checker::cli::{Cli, Commands};
use edge_airdrop_checker::{report, CheckerError, Config, Result};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("edge_airdrop_checker=debug,info")
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, config).await {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let checker = Checker::new(&config)?;

    match cli.command.unwrap_or(Commands::Check { verbose: false }) {
        Commands::Check { verbose } => {
            println!(
                "{}",
                "=== LayerEdge Airdrop Eligibility Checker ===".cyan().bold()
            );
            checker.run_all(verbose).await?;
        }

        Commands::Address { address, verbose } => {
            let address = address
                .parse()
                .map_err(|e| CheckerError::Config(format!("invalid address {}: {}", address, e)))?;
            let report = checker.check_address(address).await;
            report::print(&report, verbose);
        }
    }

    Ok(())
}
