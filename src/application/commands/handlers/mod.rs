//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod order_handlers;

pub use order_handlers::*;
