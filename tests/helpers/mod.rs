//! 测试用的内存假后端
#![allow(dead_code)]

use async_trait::async_trait;
use invoice_ocr_gateway::models::{Document, InvoiceId, OcrBackend, PerformanceData, RawOcrResponse};
use invoice_ocr_gateway::{OcrError, OcrGateway};
use serde_json::{json, Value};
use std::sync::Mutex;
use std::time::Duration;

/// 假后端: 固定响应 + 固定延迟, 记录 save-time-other 调用
pub struct FakeGateway {
    response: Result<Value, OcrError>,
    delay: Duration,
    save_delay: Duration,
    save_result: Result<(), OcrError>,
    pub recognized: Mutex<Vec<(OcrBackend, String)>>,
    saved: Mutex<Vec<(InvoiceId, f64)>>,
    performance: Value,
}

impl FakeGateway {
    pub fn new(response: Value) -> Self {
        Self {
            response: Ok(response),
            delay: Duration::ZERO,
            save_delay: Duration::ZERO,
            save_result: Ok(()),
            recognized: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            performance: json!({}),
        }
    }

    pub fn failing(error: OcrError) -> Self {
        Self {
            response: Err(error),
            ..Self::new(Value::Null)
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_save_delay(mut self, delay: Duration) -> Self {
        self.save_delay = delay;
        self
    }

    pub fn with_save_result(mut self, result: Result<(), OcrError>) -> Self {
        self.save_result = result;
        self
    }

    pub fn with_performance(mut self, performance: Value) -> Self {
        self.performance = performance;
        self
    }

    pub fn saved(&self) -> Vec<(InvoiceId, f64)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl OcrGateway for FakeGateway {
    async fn recognize(&self, backend: OcrBackend, document: &Document) -> Result<RawOcrResponse, OcrError> {
        self.recognized
            .lock()
            .unwrap()
            .push((backend, document.file_name.clone()));
        tokio::time::sleep(self.delay).await;
        let value = self.response.clone()?;
        serde_json::from_value(value).map_err(|e| OcrError::MalformedResponse(e.to_string()))
    }

    async fn save_time_other(&self, invoice_id: &InvoiceId, time_other: f64) -> Result<(), OcrError> {
        tokio::time::sleep(self.save_delay).await;
        self.saved.lock().unwrap().push((invoice_id.clone(), time_other));
        self.save_result.clone()
    }

    async fn performance_data(&self, _invoice_id: &InvoiceId) -> Result<PerformanceData, OcrError> {
        serde_json::from_value(self.performance.clone())
            .map_err(|e| OcrError::MalformedResponse(e.to_string()))
    }
}
