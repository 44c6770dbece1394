//! Memory Layer - In-Memory State Management
//!
//! 实现 OrderRepositoryPort，订单数据仅保存在进程内存中

mod order_repository;

pub use order_repository::InMemoryOrderRepository;
