pub mod bill;
pub mod registration_record;
