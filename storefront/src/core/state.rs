use std::sync::Arc;

use crate::catalog::Catalog;
use crate::checkout::MessagingLink;
use crate::core::{Config, Result};
use crate::session::SessionManager;

/// 服务器状态 - 持有所有共享组件的引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<Catalog> | 商品目录 (启动时加载，只读) |
/// | sessions | Arc<SessionManager> | 浏览会话 (草稿 + 购物车) |
/// | messaging | MessagingLink | 下单消息链接生成 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 商品目录
    pub catalog: Arc<Catalog>,
    /// 会话管理器
    pub sessions: Arc<SessionManager>,
    /// 消息链接
    pub messaging: MessagingLink,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize()`] 代替
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let sessions = SessionManager::new(config.session_idle_timeout());
        let messaging = MessagingLink::from_config(&config);
        Self {
            config,
            catalog: Arc::new(catalog),
            sessions: Arc::new(sessions),
            messaging,
        }
    }

    /// 初始化服务器状态
    ///
    /// 加载并校验商品目录；目录数据不一致时启动失败
    pub fn initialize(config: &Config) -> Result<Self> {
        let catalog = Catalog::load()?;
        tracing::info!(
            phone = %config.order_phone,
            idle_timeout_secs = config.session_idle_timeout_secs,
            "Server state initialized"
        );
        Ok(Self::new(config.clone(), catalog))
    }
}
