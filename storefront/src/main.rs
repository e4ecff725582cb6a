use storefront::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env (文件不存在时忽略)
    dotenv::dotenv().ok();

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 设置环境 (日志)
    setup_environment(&config);

    // 打印横幅
    print_banner();

    tracing::info!(
        port = config.http_port,
        environment = %config.environment,
        "🍇 Mina de Açaí storefront starting..."
    );

    // 4. 初始化服务器状态 (加载并校验目录)
    let state = match ServerState::initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            return Err(e.into());
        }
    };

    // 5. 启动 HTTP 服务器 (Server::run 会自动启动后台任务)
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
