pub mod error;
pub mod models;
pub mod password_policy;

pub use error::{CoreError, Result};
pub use models::bill::Bill;
pub use models::registration_record::{RegistrationRecord, TIMESTAMP_FORMAT};
pub use password_policy::PasswordPolicy;

#[cfg(test)]
mod tests;
