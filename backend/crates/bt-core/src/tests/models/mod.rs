mod bill;
mod registration_record;
