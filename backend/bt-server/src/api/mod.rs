pub mod bills;
pub mod error;
pub mod register;
