use alloy::primitives::Address;
use colored::Colorize;

use crate::chain::ClaimStatus;
use crate::eligibility::EligibilityRecord;

/// Outcome of checking one wallet. Fully determined by the two independent
/// external lookups; nothing is shared across wallets.
#[derive(Debug)]
pub enum Report {
    /// The configured key didn't parse; all lookups were skipped.
    InvalidKey { index: usize },
    Wallet {
        address: Address,
        record: Option<EligibilityRecord>,
        claim: ClaimStatus,
    },
}

impl Report {
    /// Plain-text rendering, free of terminal escape codes so it can be
    /// asserted on directly in tests. `verbose` lists individual proof hashes.
    pub fn render(&self, verbose: bool) -> String {
        let mut lines = Vec::new();

        match self {
            Report::InvalidKey { index } => {
                lines.push(format!("Wallet #{}: invalid private key, skipped", index + 1));
            }
            Report::Wallet {
                address,
                record,
                claim,
            } => {
                lines.push(format!("Wallet Address:       {}", address));

                match record {
                    Some(record) => {
                        lines.push(format!(
                            "Current Allocation:   {}",
                            record.allocation_display()
                        ));
                        lines.push(format!(
                            "Initial Allocation:   {}",
                            record.init_allocation_display()
                        ));

                        if record.proof.is_empty() {
                            lines.push("Merkle Proof:         not provided".to_string());
                        } else {
                            lines.push(format!(
                                "Merkle Proof:         {} element(s)",
                                record.proof.len()
                            ));
                            if verbose {
                                for hash in &record.proof {
                                    lines.push(format!("  {}", hash));
                                }
                            }
                        }

                        let breakdown = record.breakdown();
                        if breakdown.is_empty() {
                            lines.push("Allocation Breakdown: none provided".to_string());
                        } else {
                            lines.push("Allocation Breakdown:".to_string());
                            for (label, value) in breakdown {
                                lines.push(format!("  {}: {}", label, value));
                            }
                        }
                    }
                    None => {
                        lines.push(
                            "Eligibility:          no record (not eligible or API unavailable)"
                                .to_string(),
                        );
                    }
                }

                lines.push(format!("Claim Status:         {}", claim));
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Print a report to the console with a colored frame. Color stays out of
/// `render` so the report content itself is escape-free.
pub fn print(report: &Report, verbose: bool) {
    println!("{}", "---------------------------------------------".cyan());
    print!("{}", report.render(verbose));
}
