pub mod handlers;

pub use handlers::*;

use crate::service::{OcrRequestCoordinator, PerformanceAggregator};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 共享状态：OCR 提交与性能展示两个服务
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<OcrRequestCoordinator>,
    pub performance: Arc<PerformanceAggregator>,
}

/// 上传文档大小上限 (PDF 扫描件可能较大)
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// 构建路由
pub fn router(state: AppState) -> Router {
    let ocr_routes = Router::new()
        .route("/api/ocr/:backend", post(submit_ocr))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state.coordinator);

    let performance_routes = Router::new()
        .route("/api/performance", post(performance))
        .with_state(state.performance);

    Router::new()
        .route("/health", get(health_check))
        .merge(ocr_routes)
        .merge(performance_routes)
}
