//! Orders API - 订单创建与查询服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Order Context: 订单聚合与值对象
//!
//! 应用层 (application/):
//! - Ports: OrderRepositoryPort
//! - Commands: CreateOrder
//! - Queries: GetOrder
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 进程内订单存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
