use crate::{LedgerMetrics, RegistrationError, RegistrationLedger, RegistrationResult};

use bt_core::{PasswordPolicy, RegistrationRecord};

use std::sync::Arc;
use std::time::Instant;

use log::{error, info, warn};

/// Answers registration requests: password policy first, then the
/// duplicate-checked ledger append.
///
/// The password is only inspected; it is never stored or logged.
#[derive(Clone)]
pub struct RegistrationService {
    ledger: Arc<RegistrationLedger>,
    metrics: LedgerMetrics,
}

impl RegistrationService {
    pub fn new(ledger: Arc<RegistrationLedger>) -> Self {
        Self {
            ledger,
            metrics: LedgerMetrics::new(),
        }
    }

    pub fn ledger(&self) -> &Arc<RegistrationLedger> {
        &self.ledger
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> RegistrationResult<RegistrationRecord> {
        let result = self.try_register(username, email, password).await;

        match &result {
            Ok(record) => {
                self.metrics.registration_succeeded();
                info!("Registered user '{}'", record.username);
            }
            Err(e @ RegistrationError::StorageFailure { .. }) => {
                self.metrics.registration_failed(e.reason());
                error!("Registration of '{}' failed: {}", username, e);
            }
            Err(e) => {
                self.metrics.registration_failed(e.reason());
                warn!("Registration of '{}' rejected: {}", username, e.reason());
            }
        }

        result
    }

    async fn try_register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> RegistrationResult<RegistrationRecord> {
        if !PasswordPolicy::validate(password) {
            return Err(RegistrationError::weak_password());
        }

        if username.trim().is_empty() {
            return Err(RegistrationError::missing_field("username"));
        }

        if email.trim().is_empty() {
            return Err(RegistrationError::missing_field("email"));
        }

        let start = Instant::now();
        let outcome = self.ledger.append_if_unique(username, email).await;
        self.metrics.append_latency(start.elapsed());

        Ok(outcome?)
    }
}
