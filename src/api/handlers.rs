use crate::models::{Document, InvoiceId, OcrBackend};
use crate::service::{OcrRequestCoordinator, PerformanceAggregator};
use axum::{
    extract::{Json, Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let response = ErrorResponse {
        success: false,
        message: message.into(),
    };
    (status, Json(response)).into_response()
}

/// 性能数据请求体
#[derive(Debug, Deserialize)]
pub struct PerformanceQuery {
    pub invoice_id: Option<InvoiceId>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 从 multipart 中取出 file 字段
async fn read_document(mut multipart: Multipart) -> Result<Option<Document>, String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(|e| e.to_string())?;
        return Ok(Some(Document::new(file_name, content_type, bytes.to_vec())));
    }
    Ok(None)
}

/// 提交文档进行 OCR 与发票判定
pub async fn submit_ocr(
    State(coordinator): State<Arc<OcrRequestCoordinator>>,
    Path(backend): Path<String>,
    multipart: Multipart,
) -> Response {
    let backend: OcrBackend = match backend.parse() {
        Ok(backend) => backend,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let document = match read_document(multipart).await {
        Ok(Some(document)) => document,
        Ok(None) => return error_response(StatusCode::BAD_REQUEST, "Missing 'file' part"),
        Err(e) => return error_response(StatusCode::BAD_REQUEST, format!("Invalid upload: {}", e)),
    };

    match coordinator.submit(&document, backend).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => error_response(e.status_code(), format!("Error: {}", e)),
    }
}

/// 读取某张发票的性能数据 (图表展示用)
pub async fn performance(
    State(aggregator): State<Arc<PerformanceAggregator>>,
    Json(req): Json<PerformanceQuery>,
) -> Response {
    let Some(invoice_id) = req.invoice_id else {
        return error_response(StatusCode::BAD_REQUEST, "No invoice data available");
    };

    match aggregator.load(&invoice_id).await {
        Ok(Some(model)) => (StatusCode::OK, Json(model)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "No data available!"),
        Err(e) => error_response(e.status_code(), format!("Error: {}", e)),
    }
}
