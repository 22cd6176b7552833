pub mod chain;
pub mod checker;
pub mod cli;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod report;
pub mod wallet;

pub use config::Config;
pub use error::{CheckerError, Result};
