//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`catalog`] - 商品目录 (只读)
//! - [`sessions`] - 浏览会话、命令和结账

pub mod catalog;
pub mod health;
pub mod sessions;
