use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ClassificationResult, ExtractedFields, InvoiceId, OcrBackend, TimingRecord};

/// 耗时持久化结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PersistenceStatus {
    /// 不是发票, 不保存
    Skipped,
    Saved,
    Failed { reason: String },
}

/// 一次 OCR 提交的完整结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub backend: OcrBackend,
    pub text: String,
    /// parsed_data + id
    pub extracted_fields: ExtractedFields,
    pub invoice_id: Option<InvoiceId>,
    pub classification: ClassificationResult,
    pub timing: TimingRecord,
    pub persistence: PersistenceStatus,
    pub completed_at: DateTime<Utc>,
}
