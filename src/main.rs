use product_catalog::infrastructure::{config::Config, logger::Logger};
use product_catalog::{build_router, MemoryStore, ProductStore};
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个参数为可选的配置文件路径
    let config = match env::args().nth(1) {
        Some(path) => Config::load_from_file(&path)?,
        None => Config::default(),
    };

    Logger::init(&config.logging.level);

    let store: Arc<dyn ProductStore> = Arc::new(MemoryStore::new());
    let app = build_router(store);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 商品目录服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /products?merchantId=  - 按商户列出商品");
    info!("   POST   /product/create        - 创建商品");
    info!("   POST   /product/edit          - 编辑商品 (亦接受 PUT)");
    info!("   POST   /product/delete?id=    - 删除商品 (亦接受 DELETE)");

    axum::serve(listener, app).await?;
    Ok(())
}
