use crate::{CoreError, RegistrationRecord};

use chrono::{NaiveDate, Timelike};
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_new_record_when_created_then_timestamp_has_second_precision() {
    let record = RegistrationRecord::new("alice", "a@x.com");

    assert_that!(record.timestamp.nanosecond(), eq(0));
    assert_that!(record.username.as_str(), eq("alice"));
    assert_that!(record.email.as_str(), eq("a@x.com"));
}

#[test]
fn given_record_when_formatted_then_uses_ledger_format() {
    let mut record = RegistrationRecord::new("alice", "a@x.com");
    record.timestamp = NaiveDate::from_ymd_opt(2026, 3, 7)
        .unwrap()
        .and_hms_opt(9, 5, 1)
        .unwrap();

    assert_that!(record.formatted_timestamp().as_str(), eq("2026-03-07 09:05:01"));
}

#[test]
fn given_ledger_timestamp_when_parsed_then_ok() {
    let result = RegistrationRecord::parse_timestamp("2026-03-07 09:05:01");

    assert_that!(result, ok(anything()));
    let parsed = result.unwrap();
    assert_that!(parsed.hour(), eq(9));
    assert_that!(parsed.second(), eq(1));
}

#[test]
fn given_garbage_timestamp_when_parsed_then_error() {
    let result = RegistrationRecord::parse_timestamp("yesterday");

    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    assert!(matches!(&error, CoreError::InvalidTimestamp { value, .. } if value == "yesterday"));
}

#[test]
fn test_collides_with_matches_either_field() {
    let record = RegistrationRecord::new("alice", "a@x.com");

    assert!(record.collides_with("alice", "other@x.com"));
    assert!(record.collides_with("bob", "a@x.com"));
    assert!(!record.collides_with("bob", "b@x.com"));
    assert!(!record.collides_with("Alice", "A@x.com"));
}
