//! 商品目录：模型、存储、校验、服务与处理器

pub mod handler;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;
