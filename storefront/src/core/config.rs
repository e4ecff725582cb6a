use std::time::Duration;

/// 服务器配置 - 店面服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后按天滚动写文件 |
/// | MESSAGING_BASE_URL | https://api.whatsapp.com/send/ | 下单消息链接 |
/// | ORDER_PHONE | 5591985344280 | 接单手机号 |
/// | SESSION_IDLE_TIMEOUT_SECS | 3600 | 会话空闲超时(秒) |
/// | SESSION_SWEEP_INTERVAL_SECS | 60 | 会话清理间隔(秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 ORDER_PHONE=5591900000000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    /// 日志级别 (trace | debug | info | warn | error)
    pub log_level: String,
    /// 日志目录 (可选)
    pub log_dir: Option<String>,

    // === 下单消息 ===
    /// 消息服务链接前缀
    pub messaging_base_url: String,
    /// 接单手机号
    pub order_phone: String,

    // === 会话 ===
    /// 会话空闲超时 (秒)
    pub session_idle_timeout_secs: u64,
    /// 会话清理间隔 (秒)
    pub session_sweep_interval_secs: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),

            messaging_base_url: std::env::var("MESSAGING_BASE_URL")
                .unwrap_or_else(|_| "https://api.whatsapp.com/send/".into()),
            order_phone: std::env::var("ORDER_PHONE").unwrap_or_else(|_| "5591985344280".into()),

            session_idle_timeout_secs: std::env::var("SESSION_IDLE_TIMEOUT_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3600),
            session_sweep_interval_secs: std::env::var("SESSION_SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(60),
        }
    }

    /// 会话空闲超时
    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    /// 会话清理间隔
    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval_secs)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
