use serde::{Deserialize, Serialize};

use super::OcrBackend;

/// 单次提交的耗时拆分 (秒)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    pub recognition_seconds: f64,
    pub parsing_seconds: f64,
    /// 后端以外的耗时, 可能为负
    pub other_seconds: f64,
    /// 客户端实测的总耗时
    pub total_seconds: f64,
}

/// 发票判定结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub score: f64,
    pub is_invoice: bool,
}

/// 已持久化的性能数据 (按发票 ID 读取, 只读)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    pub recognition_seconds: f64,
    pub parsing_seconds: f64,
    pub other_seconds: f64,
    /// 0-100, 不同后端之间不可比
    pub confidence_score: f64,
    pub method: OcrBackend,
}
