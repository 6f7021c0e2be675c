mod bill_dto;
mod error;
