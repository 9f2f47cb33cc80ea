use anyhow::Context;
use product_showcase::app::{self, AppState};
use product_showcase::config::{self, AppConfig};
use product_showcase::infrastructure::logger::Logger;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个参数可指定配置文件路径
    let explicit = env::args().nth(1).map(PathBuf::from);
    let config_path = config::locate_config_file(explicit.as_deref());
    let config: AppConfig = config::load_config(config_path.as_deref())?;

    let _guard = Logger::init(&config.logging)?;

    match &config_path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let state = AppState::from_config(&config).context("无法创建上游 HTTP 客户端")?;
    info!(
        "上游商品目录: {}，请求超时 {}ms",
        state.catalog.base_url(),
        config.catalog.timeout_ms
    );

    let app = app::router(state, Duration::from_secs(config.http.timeout_seconds));

    let addr = config.http.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 商品展示服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET  /                  - API 信息");
    info!("   GET  /api/products      - 获取全部商品");
    info!("   GET  /api/products/ids  - 获取全部商品 ID");
    info!("   GET  /api/products/:id  - 获取单个商品");
    info!("   POST /api/contact       - 提交联系表单");
    info!("   GET  /health            - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听 Ctrl-C 信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到停止信号，正在关闭...");
}
