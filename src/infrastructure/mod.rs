//! 基础设施层：存储、配置、日志

pub mod config;
pub mod logger;
pub mod store;
