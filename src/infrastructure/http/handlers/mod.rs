//! HTTP Handlers

mod health;
mod order;

pub use health::*;
pub use order::*;
