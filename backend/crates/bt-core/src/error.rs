use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid timestamp '{value}': {source} {location}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
