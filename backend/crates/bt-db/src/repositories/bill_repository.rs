use crate::{DbError, Result as DbErrorResult};

use bt_core::Bill;

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read cache of bills served by `GET /api/bills`.
#[derive(Clone)]
pub struct BillRepository {
    pool: SqlitePool,
}

impl BillRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Replace the entire cache with `bills` in one transaction.
    ///
    /// Readers see either the old set or the new one. A later bill with an
    /// id already seen in `bills` overwrites the earlier one.
    pub async fn replace_all(&self, bills: &[Bill]) -> DbErrorResult<u64> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM bills")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        for bill in bills {
            let date_introduced = bill
                .date_introduced
                .map(|d| d.format(DATE_FORMAT).to_string());

            sqlx::query(
                r#"
                    INSERT OR REPLACE INTO bills (id, title, ministry, status, date_introduced)
                    VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(bill.id)
            .bind(&bill.title)
            .bind(&bill.ministry)
            .bind(&bill.status)
            .bind(date_introduced)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let stored = self.count().await?;
        debug!("Bill cache replaced: {} removed, {} stored", removed, stored);

        Ok(stored)
    }

    /// All bills, newest first (`date_introduced DESC, id DESC`).
    ///
    /// Bills without an introduction date sort after every dated bill.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Bill>> {
        let rows = sqlx::query(
            r#"
                SELECT id, title, ministry, status, date_introduced
                FROM bills
                ORDER BY date_introduced DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_bill).collect()
    }

    pub async fn count(&self) -> DbErrorResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bills")
            .fetch_one(&self.pool)
            .await?;

        u64::try_from(count).map_err(|e| DbError::InvalidRow {
            table: "bills",
            message: format!("negative count: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn row_to_bill(row: &SqliteRow) -> DbErrorResult<Bill> {
        let date_introduced: Option<String> = row.try_get("date_introduced")?;
        let date_introduced = date_introduced
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| DbError::InvalidRow {
                    table: "bills",
                    message: format!("Invalid date_introduced '{}': {}", raw, e),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()?;

        Ok(Bill {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            ministry: row.try_get("ministry")?,
            status: row.try_get("status")?,
            date_introduced,
        })
    }
}
