use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Eligibility payload returned by the airdrop API for one address.
///
/// The API is loose about numeric fields (sometimes strings, sometimes
/// numbers), so allocations are kept as raw JSON values and formatted at
/// render time. `details` uses a BTreeMap so the breakdown renders in a
/// stable order.
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityRecord {
    #[serde(default)]
    pub allocation: Option<Value>,

    #[serde(rename = "initAllocation", default)]
    pub init_allocation: Option<Value>,

    /// Merkle inclusion proof; opaque here, only its length is reported.
    #[serde(default)]
    pub proof: Vec<String>,

    /// Per-category allocation breakdown.
    #[serde(default)]
    pub details: BTreeMap<String, Value>,
}

impl EligibilityRecord {
    pub fn allocation_display(&self) -> String {
        amount_or_na(&self.allocation)
    }

    pub fn init_allocation_display(&self) -> String {
        amount_or_na(&self.init_allocation)
    }

    /// Breakdown entries with empty values filtered out.
    pub fn breakdown(&self) -> Vec<(String, String)> {
        self.details
            .iter()
            .filter_map(|(label, value)| match value {
                Value::Null => None,
                Value::String(s) if s.is_empty() => None,
                Value::String(s) => Some((label.clone(), s.clone())),
                other => Some((label.clone(), other.to_string())),
            })
            .collect()
    }
}

fn amount_or_na(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "N/A".to_string(),
    }
}
