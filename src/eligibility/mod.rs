pub mod api;
pub mod types;

pub use api::EligibilityClient;
pub use types::EligibilityRecord;
