use crate::Bill;

use chrono::NaiveDate;

#[test]
fn test_bill_serializes_date_as_iso_string() {
    let mut bill = Bill::new(108, "The Disaster Management (Amendment) Bill, 2024", "Pending");
    bill.ministry = Some("Home Affairs".to_string());
    bill.date_introduced = NaiveDate::from_ymd_opt(2024, 8, 15);

    let json = serde_json::to_value(&bill).unwrap();

    assert_eq!(json["id"], 108);
    assert_eq!(json["ministry"], "Home Affairs");
    assert_eq!(json["date_introduced"], "2024-08-15");
}

#[test]
fn test_bill_without_optional_fields_serializes_nulls() {
    let bill = Bill::new(1, "Untitled", "Introduced");

    let json = serde_json::to_value(&bill).unwrap();

    assert!(json["ministry"].is_null());
    assert!(json["date_introduced"].is_null());
}
