//! Mina de Açaí Storefront - 店面服务
//!
//! # 架构概述
//!
//! 顾客浏览商品目录，定制一杯açaí (杯型 + 配料 + 数量)，加入购物车，
//! 最后生成一条预填的下单消息链接。服务端不保存订单，只负责计价和生成消息。
//!
//! - **目录** (`catalog`): 启动时加载的只读商品、杯型、配料、地方特产
//! - **计价** (`pricing`, `order_money`): Decimal 精确计算，未知键按 0 计价
//! - **草稿** (`draft`): 单个商品的定制过程
//! - **购物车** (`cart`): 已确认的订单行
//! - **结账** (`checkout`): 订单消息和消息链接
//! - **会话** (`session`): 每个浏览器独立的草稿 + 购物车
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! storefront/src/
//! ├── core/          # 配置、状态、错误、后台任务
//! ├── catalog/       # 商品目录和加载校验
//! ├── pricing/       # 计价
//! ├── order_money/   # 金额计算和格式化
//! ├── draft/         # 定制草稿
//! ├── cart/          # 购物车
//! ├── checkout/      # 订单消息
//! ├── session/       # 会话管理
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装和中间件
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod draft;
pub mod order_money;
pub mod pricing;
pub mod routes;
pub mod session;
pub mod utils;

// Re-export 公共类型
pub use catalog::Catalog;
pub use core::{Config, Server, ServerState};
pub use routes::{build_app, build_router};
pub use session::SessionManager;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (日志)
pub fn setup_environment(config: &Config) {
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );
}

pub fn print_banner() {
    println!(
        r#"
    __  ____                 __        ___       __
   /  |/  (_)___  ____ _   / /__     /   | ____ _(_)
  / /|_/ / / __ \/ __ `/  / / _ \   / /| |/ __ `/ /
 / /  / / / / / / /_/ /  / /  __/  / ___ / /_/ / /
/_/  /_/_/_/ /_/\__,_/  /_/\___/  /_/  |_\__,_/_/
    "#
    );
}
