use bt_core::Bill;

use serde::Serialize;

/// Bill as returned by `GET /api/bills`
#[derive(Debug, Serialize)]
pub struct BillDto {
    pub id: i64,
    pub title: String,
    pub ministry: Option<String>,
    pub status: String,
    /// `YYYY-MM-DD`, or null when unknown
    pub date_introduced: Option<String>,
}

impl From<Bill> for BillDto {
    fn from(bill: Bill) -> Self {
        Self {
            id: bill.id,
            title: bill.title,
            ministry: bill.ministry,
            status: bill.status,
            date_introduced: bill
                .date_introduced
                .map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}
