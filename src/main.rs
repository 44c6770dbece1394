//! Orders API - 订单创建与查询服务

use std::sync::Arc;

use orders_api::config::{load_config, print_config};
use orders_api::infrastructure::http::{AppState, HttpServer, ServerConfig};
use orders_api::infrastructure::memory::InMemoryOrderRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},orders_api={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().with_env_filter(env_filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Orders API v{}", config.service.version);
    print_config(&config);

    // 订单存储仅存在于进程内存，重启即丢失
    let order_repo = Arc::new(InMemoryOrderRepository::new());

    let server_config = ServerConfig::from_app_config(&config);
    let state = AppState::new(order_repo, config.service.clone());
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
