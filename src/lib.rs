//! # 商品目录 REST API
//!
//! 基于内存存储的商品目录服务，提供列表、查询、创建、局部更新和删除。
//! - `core`：配置、错误处理、中间件
//! - `app`：路由与商品目录业务
//! - `infrastructure`：日志

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{build_app, catalog::handler::AppState, routes};
pub use app::catalog::service::CatalogService;
