use anyhow::Context;
use catalog_api::{
    build_app, core::config::AppConfig, infrastructure::logger::Logger, AppState, CatalogService,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("加载配置失败")?;
    Logger::init(&config.logging.level);

    info!("启动商品目录服务...");

    let catalog = CatalogService::with_seed();
    info!("✅ 已载入 {} 个示例商品", catalog.count()?);

    let app = build_app(AppState::new(catalog), &config.http);

    let addr = config.socket_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {addr}"))?;

    info!("🚀 服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /api/products       - 商品列表 (支持 category, q 查询参数)");
    info!("   POST   /api/products       - 创建商品");
    info!("   GET    /api/products/:id   - 获取商品");
    info!("   PATCH  /api/products/:id   - 局部更新商品");
    info!("   DELETE /api/products/:id   - 删除商品");
    info!("   GET    /api/categories     - 分类列表");
    info!("   GET    /health             - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务运行失败")?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "监听关闭信号失败");
    }
}
