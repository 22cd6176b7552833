use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "edge-check")]
#[command(about = "Airdrop eligibility and claim-status checker for LayerEdge wallets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check every wallet key from the configuration (default)
    Check {
        /// List individual Merkle proof entries
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check a single address without a private key
    Address {
        /// Wallet address to look up
        address: String,

        /// List individual Merkle proof entries
        #[arg(short, long)]
        verbose: bool,
    },
}
