pub mod csv_row;
pub mod error;
pub mod metrics;
pub mod registration_ledger;
pub mod registration_service;

pub use csv_row::{HEADER, encode_row, parse_rows};
pub use error::{LedgerError, RegistrationError, RegistrationResult, Result};
pub use metrics::LedgerMetrics;
pub use registration_ledger::RegistrationLedger;
pub use registration_service::RegistrationService;

#[cfg(test)]
mod tests;
