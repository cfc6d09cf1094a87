use crate::models::TimingRecord;

/// 用客户端实测总耗时与后端上报的识别/解析耗时, 推算"其他"耗时
///
/// `other = measured - recognition + parsing`, 解析耗时是加上而不是减去,
/// 与已持久化的历史数据保持一致。`total` 始终等于实测值。
pub fn reconcile(
    measured_total_seconds: f64,
    recognition_seconds: f64,
    parsing_seconds: f64,
) -> TimingRecord {
    TimingRecord {
        recognition_seconds,
        parsing_seconds,
        other_seconds: measured_total_seconds - recognition_seconds + parsing_seconds,
        total_seconds: measured_total_seconds,
    }
}
