//! # 商品目录服务
//!
//! 基于 Axum 的内存商品目录：按商户列出、创建、编辑、删除商品。
//! - `app`: 路由与商品目录的模型、服务、处理器
//! - `common`: 错误处理与中间件
//! - `infrastructure`: 并发存储、配置、日志

pub mod app;
pub mod common;
pub mod infrastructure;

pub use app::build_router;
pub use app::catalog::model::Product;
pub use infrastructure::store::{MemoryStore, ProductStore};
