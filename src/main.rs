use invoice_ocr_gateway::{
    router, AppConfig, AppState, HttpGateway, InvoiceClassifier, OcrGateway, OcrRequestCoordinator,
    PerformanceAggregator,
};
use std::sync::Arc;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    // OCR 后端客户端
    let gateway: Arc<dyn OcrGateway> = Arc::new(HttpGateway::new(&config.ocr)?);
    info!("OCR backend: {}", config.ocr.backend_url);

    let state = AppState {
        coordinator: Arc::new(OcrRequestCoordinator::new(
            gateway.clone(),
            InvoiceClassifier::default(),
            config.ocr.request_timeout(),
        )),
        performance: Arc::new(PerformanceAggregator::new(gateway)),
    };

    let app = router(state).layer(
        ServiceBuilder::new().layer(GlobalConcurrencyLimitLayer::new(config.server.max_concurrent_requests)),
    );

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/ocr/tesseract   - OCR via Tesseract");
    info!("  POST /api/ocr/paddleOCR   - OCR via PaddleOCR");
    info!("  POST /api/performance     - timing breakdown for an invoice");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
