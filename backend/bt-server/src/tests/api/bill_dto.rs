use crate::BillDto;

use bt_core::Bill;

use chrono::NaiveDate;

#[test]
fn given_dated_bill_when_converted_then_date_is_iso() {
    let mut bill = Bill::new(4, "Waqf (Amendment) Bill", "Assented by President");
    bill.date_introduced = NaiveDate::from_ymd_opt(2026, 1, 9);

    let dto = BillDto::from(bill);

    assert_eq!(dto.date_introduced.as_deref(), Some("2026-01-09"));
}

#[test]
fn given_undated_bill_when_serialized_then_date_is_null() {
    let dto = BillDto::from(Bill::new(5, "T", "Pending"));

    let json = serde_json::to_value(&dto).unwrap();

    assert!(json["date_introduced"].is_null());
    assert!(json["ministry"].is_null());
    assert_eq!(json["id"], 5);
}
