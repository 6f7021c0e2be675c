#[allow(clippy::module_inception)]
pub mod register;
pub mod register_request;
pub mod register_response;
