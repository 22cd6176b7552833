use std::fmt;

use alloy::network::TransactionBuilder;
use alloy::primitives::{bytes, Address, Bytes};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolValue;
use tracing::{debug, warn};

use crate::error::{CheckerError, Result};

/// Selector plus fixed first parameter of the airdrop contract's claim-status
/// view function, captured verbatim from the production call. Opaque: the
/// contract expects exactly these bytes ahead of the address parameter.
const CLAIM_CALL_PREFIX: Bytes =
    bytes!("dfcae6229ff0a51bc4e4167cdd0fedfd04c446baee7914d324b709c93c45b1e936c7d1b9");

/// On-chain claim flag for a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    Claimed,
    NotClaimed,
    /// The call failed or returned bytes that don't decode as a bool.
    Unknown,
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimStatus::Claimed => write!(f, "Claimed"),
            ClaimStatus::NotClaimed => write!(f, "Not Claimed"),
            ClaimStatus::Unknown => write!(f, "Could not determine"),
        }
    }
}

/// Read-only JSON-RPC client for the airdrop contract. One provider is built
/// at startup and shared across all wallets.
pub struct ChainClient {
    provider: DynProvider,
    contract: Address,
}

impl ChainClient {
    pub fn new(rpc_url: &str, contract_address: &str) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|e| CheckerError::Connection(format!("invalid RPC URL {}: {}", rpc_url, e)))?;
        let provider = ProviderBuilder::new().connect_http(url).erased();

        let contract = contract_address.parse::<Address>().map_err(|e| {
            CheckerError::Config(format!(
                "invalid contract address {}: {}",
                contract_address, e
            ))
        })?;

        Ok(Self { provider, contract })
    }

    /// Check whether the wallet has already claimed, via a single `eth_call`.
    /// RPC and decode failures map to `Unknown`; this never aborts the run.
    pub async fn claim_status(&self, address: &Address) -> ClaimStatus {
        let data = claim_call_data(address);
        debug!("eth_call to {} with data {}", self.contract, data);

        let tx = TransactionRequest::default()
            .with_to(self.contract)
            .with_input(data);

        match self.provider.call(tx).await {
            Ok(raw) => decode_claim_flag(&raw),
            Err(e) => {
                warn!("claim-status call failed for {}: {}", address, e);
                ClaimStatus::Unknown
            }
        }
    }
}

/// Call data: fixed prefix, then the address left-zero-padded to 32 bytes.
fn claim_call_data(address: &Address) -> Bytes {
    let mut data = CLAIM_CALL_PREFIX.to_vec();
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(address.as_slice());
    Bytes::from(data)
}

fn decode_claim_flag(raw: &[u8]) -> ClaimStatus {
    match <bool as SolValue>::abi_decode_validate(raw) {
        Ok(true) => ClaimStatus::Claimed,
        Ok(false) => ClaimStatus::NotClaimed,
        Err(e) => {
            warn!("claim-status result did not decode as bool: {}", e);
            ClaimStatus::Unknown
        }
    }
}
