//! 商品目录：模型、服务与处理器

pub mod handler;
pub mod model;
pub mod service;
