pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    bills::{bill_dto::BillDto, bills::list_bills},
    error::ApiError,
    error::Result as ApiResult,
    register::{
        register::register, register_request::RegisterRequest,
        register_response::RegisterResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
