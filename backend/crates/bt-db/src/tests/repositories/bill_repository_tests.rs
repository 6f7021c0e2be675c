use crate::tests::memory_pool;
use crate::{BillRepository, DbError};

use googletest::prelude::*;

#[tokio::test]
async fn given_malformed_date_in_table_when_find_all_then_invalid_row_error() {
    // Given: a row written outside the repository with a bad date
    let pool = memory_pool().await;
    sqlx::query(
        "INSERT INTO bills (id, title, ministry, status, date_introduced) VALUES (1, 'T', NULL, 'Pending', '31/12/2025')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let repo = BillRepository::new(pool);

    // When
    let result = repo.find_all().await;

    // Then
    assert!(matches!(
        result,
        Err(DbError::InvalidRow { table: "bills", .. })
    ));
}

#[tokio::test]
async fn given_fresh_schema_when_counted_then_zero() {
    let repo = BillRepository::new(memory_pool().await);

    let count = repo.count().await.unwrap();

    assert_that!(count, eq(0));
}

#[tokio::test]
async fn given_migrations_applied_twice_when_run_then_idempotent() {
    let pool = memory_pool().await;

    let result = crate::run_migrations(&pool).await;

    assert_that!(result, ok(anything()));
}
