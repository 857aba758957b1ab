use vendor_server::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 工作目录, 日志) 并加载配置
    let config = setup_environment()?;

    print_banner();

    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Dabbzo vendor server starting..."
    );

    // 2. 启动 HTTP 服务器 (Server::run 会初始化状态)
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
