//! Bill entity - one row of the read cache refreshed by the sync job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A parliamentary bill as served by `GET /api/bills`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    pub title: String,
    pub ministry: Option<String>,
    pub status: String,
    /// Date the bill was introduced (`YYYY-MM-DD`), if the source provided one
    pub date_introduced: Option<NaiveDate>,
}

impl Bill {
    pub fn new(id: i64, title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ministry: None,
            status: status.into(),
            date_introduced: None,
        }
    }
}
