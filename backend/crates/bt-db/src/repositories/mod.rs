pub mod bill_repository;
