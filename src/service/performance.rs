use serde::Serialize;
use std::sync::Arc;

use crate::client::OcrGateway;
use crate::error::OcrError;
use crate::models::{InvoiceId, OcrBackend, PerformanceSnapshot};

/// 两种后端的置信度算法不同, 不能直接比较
pub const CONFIDENCE_COMPARABILITY_NOTE: &str = "Tesseract and PaddleOCR scores are computed by different methods and cannot be compared directly.";

/// 图表中的一段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSegment {
    pub label: &'static str,
    pub seconds: f64,
}

/// 展示用的性能数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    pub method: OcrBackend,
    /// Recognizing, Parsing, Other
    pub segments: [ChartSegment; 3],
    /// 例如 "87.35%"
    pub confidence: String,
    pub confidence_note: &'static str,
    pub comparability_note: &'static str,
    pub total_seconds: f64,
    /// 例如 "3.20s"
    pub total_display: String,
}

fn confidence_note(method: OcrBackend) -> &'static str {
    match method {
        OcrBackend::Tesseract => {
            "Percentage indicating how confident the OCR engine was in the correctness of the recognized text."
        }
        OcrBackend::PaddleOcr => {
            "Probability of the recognized text being correct, as calculated by the recognition model."
        }
    }
}

pub fn present(snapshot: &PerformanceSnapshot) -> DisplayModel {
    let segments = [
        ChartSegment { label: "Recognizing", seconds: snapshot.recognition_seconds },
        ChartSegment { label: "Parsing", seconds: snapshot.parsing_seconds },
        ChartSegment { label: "Other", seconds: snapshot.other_seconds },
    ];
    let total_seconds: f64 = segments.iter().map(|s| s.seconds).sum();

    DisplayModel {
        method: snapshot.method,
        segments,
        confidence: format!("{:.2}%", snapshot.confidence_score),
        confidence_note: confidence_note(snapshot.method),
        comparability_note: CONFIDENCE_COMPARABILITY_NOTE,
        total_seconds,
        total_display: format!("{:.2}s", total_seconds),
    }
}

/// 按发票 ID 读取性能数据并整理为展示模型
pub struct PerformanceAggregator {
    gateway: Arc<dyn OcrGateway>,
}

impl PerformanceAggregator {
    pub fn new(gateway: Arc<dyn OcrGateway>) -> Self {
        Self { gateway }
    }

    /// Ok(None) 表示后端暂无该发票的数据
    pub async fn load(&self, invoice_id: &InvoiceId) -> Result<Option<DisplayModel>, OcrError> {
        let data = self.gateway.performance_data(invoice_id).await?;
        let Some(snapshot) = data.into_snapshot()? else {
            tracing::warn!("No performance data for invoice {}", invoice_id);
            return Ok(None);
        };
        Ok(Some(present(&snapshot)))
    }
}
