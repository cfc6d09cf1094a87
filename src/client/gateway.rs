use async_trait::async_trait;

use crate::error::OcrError;
use crate::models::{Document, InvoiceId, OcrBackend, PerformanceData, RawOcrResponse};

/// OCR 后端及其持久化接口
#[async_trait]
pub trait OcrGateway: Send + Sync {
    /// POST {backend}: 上传文档并取回识别结果
    async fn recognize(&self, backend: OcrBackend, document: &Document) -> Result<RawOcrResponse, OcrError>;

    /// POST save-time-other
    async fn save_time_other(&self, invoice_id: &InvoiceId, time_other: f64) -> Result<(), OcrError>;

    /// POST get-performance-data
    async fn performance_data(&self, invoice_id: &InvoiceId) -> Result<PerformanceData, OcrError>;
}
