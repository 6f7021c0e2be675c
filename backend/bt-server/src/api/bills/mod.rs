pub mod bill_dto;
#[allow(clippy::module_inception)]
pub mod bills;
