use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{ExtractedFields, InvoiceId, OcrBackend, PerformanceSnapshot};
use crate::error::OcrError;

/// 后端返回的耗时子记录
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTiming {
    pub recognition: Option<f64>,
    pub parsing: Option<f64>,
}

/// OCR 接口的原始响应, 字段全部可选, 由 `validate` 做结构校验
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOcrResponse {
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_fields")]
    pub parsed_data: Option<ExtractedFields>,
    pub invoice_id: Option<InvoiceId>,
    pub time: Option<RawTiming>,
}

/// parsed_data 不是对象时视为没有字段, 不作为错误
fn lenient_fields<'de, D>(deserializer: D) -> Result<Option<ExtractedFields>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// 结构合法的 OCR 响应
#[derive(Debug, Clone, PartialEq)]
pub struct OcrResponse {
    pub text: String,
    pub parsed_data: ExtractedFields,
    pub invoice_id: Option<InvoiceId>,
    pub recognition_seconds: f64,
    pub parsing_seconds: f64,
}

impl RawOcrResponse {
    /// 必须包含 text 与 time.recognition / time.parsing; parsed_data 缺失视为空
    pub fn validate(self) -> Result<OcrResponse, OcrError> {
        let time = self
            .time
            .ok_or_else(|| OcrError::MalformedResponse("response has no 'time' record".to_string()))?;
        let recognition_seconds = time.recognition.ok_or_else(|| {
            OcrError::MalformedResponse("response has no 'time.recognition'".to_string())
        })?;
        let parsing_seconds = time.parsing.ok_or_else(|| {
            OcrError::MalformedResponse("response has no 'time.parsing'".to_string())
        })?;
        let text = self
            .text
            .ok_or_else(|| OcrError::MalformedResponse("response has no 'text'".to_string()))?;

        Ok(OcrResponse {
            text,
            parsed_data: self.parsed_data.unwrap_or_default(),
            invoice_id: self.invoice_id,
            recognition_seconds,
            parsing_seconds,
        })
    }
}

/// save-time-other 请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTimeOtherRequest {
    pub invoice_id: InvoiceId,
    pub time_other: f64,
}

/// get-performance-data 请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRequest {
    pub invoice_id: InvoiceId,
}

/// get-performance-data 响应
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerformanceData {
    pub recognition_time: Option<f64>,
    pub parsing_time: Option<f64>,
    pub other_time: Option<f64>,
    pub average_confidence: Option<f64>,
    pub ocr_method: Option<OcrBackend>,
}

impl PerformanceData {
    /// recognition_time 缺失或为 0 表示"暂无数据", 返回 None
    pub fn into_snapshot(self) -> Result<Option<PerformanceSnapshot>, OcrError> {
        let Some(recognition_seconds) = self.recognition_time.filter(|t| *t != 0.0) else {
            return Ok(None);
        };
        let method = self.ocr_method.ok_or_else(|| {
            OcrError::MalformedResponse("performance data has no 'ocr_method'".to_string())
        })?;

        Ok(Some(PerformanceSnapshot {
            recognition_seconds,
            parsing_seconds: self.parsing_time.unwrap_or(0.0),
            other_seconds: self.other_time.unwrap_or(0.0),
            confidence_score: self.average_confidence.unwrap_or(0.0),
            method,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawOcrResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn validate_requires_time_record() {
        let err = raw(json!({ "text": "faktura", "parsed_data": {} })).validate().unwrap_err();
        assert!(matches!(err, OcrError::MalformedResponse(_)));

        let err = raw(json!({ "text": "x", "time": { "recognition": 1.0 } })).validate().unwrap_err();
        assert!(matches!(err, OcrError::MalformedResponse(_)));
    }

    #[test]
    fn validate_requires_text() {
        let err = raw(json!({ "time": { "recognition": 1.0, "parsing": 0.5 } }))
            .validate()
            .unwrap_err();
        assert!(matches!(err, OcrError::MalformedResponse(_)));
    }

    #[test]
    fn missing_parsed_data_is_empty() {
        let resp = raw(json!({
            "text": "",
            "invoice_id": 5,
            "time": { "recognition": 1.0, "parsing": 0.5 }
        }))
        .validate()
        .unwrap();
        assert!(resp.parsed_data.is_empty());
        assert_eq!(resp.invoice_id, Some(InvoiceId::from(5)));
        assert_eq!(resp.recognition_seconds, 1.0);
        assert_eq!(resp.parsing_seconds, 0.5);
    }

    #[test]
    fn wrong_typed_parsed_data_is_empty() {
        for parsed_data in [json!("none"), json!([1, 2]), json!(3), json!(null)] {
            let resp = raw(json!({
                "text": "faktura",
                "parsed_data": parsed_data,
                "time": { "recognition": 1.0, "parsing": 0.5 }
            }))
            .validate()
            .unwrap();
            assert!(resp.parsed_data.is_empty());
        }
    }

    #[test]
    fn opaque_invoice_ids_are_kept() {
        for id in [json!(7.0), json!("FA-2024-7"), json!({ "db": 7 })] {
            let resp = raw(json!({
                "text": "",
                "invoice_id": id.clone(),
                "time": { "recognition": 1.0, "parsing": 0.5 }
            }))
            .validate()
            .unwrap();
            assert_eq!(resp.invoice_id.as_ref().map(InvoiceId::as_value), Some(&id));
        }
    }

    #[test]
    fn performance_without_recognition_time_is_no_data() {
        let data: PerformanceData = serde_json::from_value(json!({ "message": "not found" })).unwrap();
        assert_eq!(data.into_snapshot().unwrap(), None);
    }

    #[test]
    fn zero_recognition_time_is_no_data() {
        let data: PerformanceData = serde_json::from_value(json!({
            "recognition_time": 0,
            "parsing_time": 0.5,
            "other_time": 1.0,
            "average_confidence": 90.0,
            "ocr_method": "Tesseract"
        }))
        .unwrap();
        assert_eq!(data.into_snapshot().unwrap(), None);
    }

    #[test]
    fn performance_nulls_default_to_zero() {
        let data: PerformanceData = serde_json::from_value(json!({
            "recognition_time": 1.5,
            "parsing_time": 0.25,
            "other_time": null,
            "average_confidence": 91.234,
            "ocr_method": "Tesseract"
        }))
        .unwrap();
        let snapshot = data.into_snapshot().unwrap().unwrap();
        assert_eq!(snapshot.other_seconds, 0.0);
        assert_eq!(snapshot.method, OcrBackend::Tesseract);
    }
}
