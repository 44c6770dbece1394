//! Order Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("quantity must be greater than or equal to 1, got {0}")]
    InvalidQuantity(i64),
}
