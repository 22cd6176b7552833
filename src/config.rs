use serde::Deserialize;
use tracing::debug;

/// Production endpoints for the LayerEdge airdrop. All of them can be
/// overridden through `CHECKER_*` environment variables or `config/default.*`.
pub const DEFAULT_API_URL: &str = "https://airdrop.layeredge.foundation/api/eligibility";
pub const DEFAULT_RPC_URL: &str = "https://rpc.layeredge.io/";
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x02E860EfB6c0d32637c4ea91d732D82403f46ceD";
pub const DEFAULT_WALLET_DELAY_MS: u64 = 1_000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api_url: String,
    pub rpc_url: String,
    pub contract_address: String,
    /// Pause between wallets so we don't burst the eligibility API.
    pub wallet_delay_ms: u64,
    /// Single private key (fallback form).
    pub private_key: Option<String>,
    /// JSON-encoded list of private keys; takes precedence when non-empty.
    pub private_keys: Option<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("rpc_url", DEFAULT_RPC_URL)?
            .set_default("contract_address", DEFAULT_CONTRACT_ADDRESS)?
            .set_default("wallet_delay_ms", DEFAULT_WALLET_DELAY_MS as i64)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("CHECKER").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Ordered list of wallet keys to check. May be empty; the orchestrator
    /// treats an empty set as a fatal configuration error.
    pub fn wallet_keys(&self) -> Vec<String> {
        resolve_keys(self.private_keys.as_deref(), self.private_key.as_deref())
    }
}

/// Resolve the configured key set: a non-empty JSON list wins, anything else
/// (absent, empty, or unparseable) falls back to the single-key form.
pub fn resolve_keys(list: Option<&str>, single: Option<&str>) -> Vec<String> {
    if let Some(raw) = list {
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(keys) if !keys.is_empty() => return keys,
            Ok(_) => debug!("private key list is empty, falling back to single key"),
            Err(e) => debug!("private key list is not valid JSON ({}), falling back", e),
        }
    }

    single.map(|key| vec![key.to_string()]).unwrap_or_default()
}
