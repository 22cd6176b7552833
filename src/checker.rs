use std::time::Duration;

use alloy::primitives::Address;
use tracing::{info, warn};

use crate::chain::ChainClient;
use crate::config::Config;
use crate::eligibility::EligibilityClient;
use crate::error::{CheckerError, Result};
use crate::report::{self, Report};
use crate::wallet;

/// Runs the eligibility and claim-status checks for every configured wallet.
///
/// Both clients are built once up front; a failure there is fatal and aborts
/// before any wallet is touched. Per-wallet failures never stop the loop.
pub struct Checker {
    api: EligibilityClient,
    chain: ChainClient,
    keys: Vec<String>,
    delay: Duration,
}

impl Checker {
    pub fn new(config: &Config) -> Result<Self> {
        let api = EligibilityClient::new(&config.api_url)?;
        let chain = ChainClient::new(&config.rpc_url, &config.contract_address)?;

        Ok(Self {
            api,
            chain,
            keys: config.wallet_keys(),
            delay: Duration::from_millis(config.wallet_delay_ms),
        })
    }

    /// Check all configured wallets strictly in order, printing each report
    /// before the next wallet starts. Pauses between wallets to keep the
    /// request rate down.
    pub async fn run_all(&self, verbose: bool) -> Result<Vec<Report>> {
        if self.keys.is_empty() {
            return Err(CheckerError::Config(
                "no private keys configured; set CHECKER_PRIVATE_KEY or CHECKER_PRIVATE_KEYS"
                    .to_string(),
            ));
        }

        info!("checking {} wallet(s)", self.keys.len());

        let mut reports = Vec::with_capacity(self.keys.len());
        for (index, key) in self.keys.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.delay).await;
            }

            let report = self.check_wallet(index, key).await;
            report::print(&report, verbose);
            reports.push(report);
        }

        Ok(reports)
    }

    async fn check_wallet(&self, index: usize, raw_key: &str) -> Report {
        let address = match wallet::derive_address(raw_key) {
            Ok(address) => address,
            Err(e) => {
                warn!("wallet #{}: {}", index + 1, e);
                return Report::InvalidKey { index };
            }
        };

        self.check_address(address).await
    }

    /// Run both lookups for one address. The HTTP fetch and the chain call
    /// are independent, so they run jointly and the report waits for both.
    pub async fn check_address(&self, address: Address) -> Report {
        let (record, claim) = tokio::join!(
            self.api.fetch(&address),
            self.chain.claim_status(&address)
        );

        Report::Wallet {
            address,
            record,
            claim,
        }
    }
}
