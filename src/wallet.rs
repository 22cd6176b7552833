use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::error::{CheckerError, Result};

/// Derive the public address for a raw private-key string.
///
/// Pure and deterministic. A malformed key yields `InvalidKey` and never a
/// partial or default address; the caller skips that wallet and keeps going.
pub fn derive_address(raw_key: &str) -> Result<Address> {
    let signer: PrivateKeySigner = raw_key
        .trim()
        .parse()
        .map_err(|e| CheckerError::InvalidKey(format!("{}", e)))?;

    Ok(signer.address())
}
