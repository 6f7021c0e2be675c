#![allow(dead_code)]

use bt_core::Bill;

use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    bt_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a test Bill introduced on the given date
pub fn create_test_bill(id: i64, date: Option<(i32, u32, u32)>) -> Bill {
    let mut bill = Bill::new(id, format!("Test Bill {}", id), "Introduced");
    bill.ministry = Some("Ministry of Law and Justice".to_string());
    bill.date_introduced = date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
    bill
}
