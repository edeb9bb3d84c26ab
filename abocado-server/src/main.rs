use abocado_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境 (dotenv, 配置, 日志)
    let config = setup_environment()?;

    print_banner();

    tracing::info!(
        environment = %config.environment,
        addr = %config.bind_addr(),
        "Abocado server starting..."
    );

    // 2. 状态 (存储, 初始数据, 服务)
    let state = ServerState::initialize(&config)?;

    // 3. 启动 HTTP 服务器直到 ctrl-c
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
