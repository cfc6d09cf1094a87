use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use std::time::Duration;

use super::OcrGateway;
use crate::config::OcrConfig;
use crate::error::OcrError;
use crate::models::{
    Document, InvoiceId, OcrBackend, PerformanceData, PerformanceRequest, RawOcrResponse,
    SaveTimeOtherRequest,
};

/// 基于 reqwest 的 OCR 后端客户端
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &OcrConfig) -> Result<Self, OcrError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| OcrError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn document_part(document: &Document) -> Part {
    let part = Part::bytes(document.bytes.clone()).file_name(document.file_name.clone());
    match part.mime_str(&document.content_type) {
        Ok(part) => part,
        // 无法解析的媒体类型: 不带 Content-Type 上传
        Err(_) => Part::bytes(document.bytes.clone()).file_name(document.file_name.clone()),
    }
}

/// 非 2xx 响应转为错误信息
async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.is_empty() {
        format!("backend returned {}", status)
    } else {
        format!("backend returned {}: {}", status, body)
    }
}

#[async_trait]
impl OcrGateway for HttpGateway {
    async fn recognize(&self, backend: OcrBackend, document: &Document) -> Result<RawOcrResponse, OcrError> {
        let kind = document.payload_kind();
        let form = Form::new()
            .part("file", document_part(document))
            .part(kind.field_name(), document_part(document));

        tracing::info!(
            "Sending {} ({} bytes, {}) to {}",
            document.file_name,
            document.bytes.len(),
            kind.field_name(),
            backend
        );

        let response = self
            .client
            .post(self.url(backend.path()))
            .multipart(form)
            .send()
            .await
            .map_err(|e| OcrError::Transport(format!("Failed to call {}: {}", backend, e)))?;

        if !response.status().is_success() {
            return Err(OcrError::Transport(error_message(response).await));
        }

        response
            .json::<RawOcrResponse>()
            .await
            .map_err(|e| OcrError::MalformedResponse(format!("Failed to parse {} response: {}", backend, e)))
    }

    async fn save_time_other(&self, invoice_id: &InvoiceId, time_other: f64) -> Result<(), OcrError> {
        let request = SaveTimeOtherRequest {
            invoice_id: invoice_id.clone(),
            time_other,
        };

        let response = self
            .client
            .post(self.url("save-time-other"))
            .json(&request)
            .send()
            .await
            .map_err(|e| OcrError::PersistenceFailure(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OcrError::PersistenceFailure(error_message(response).await));
        }

        Ok(())
    }

    async fn performance_data(&self, invoice_id: &InvoiceId) -> Result<PerformanceData, OcrError> {
        let request = PerformanceRequest {
            invoice_id: invoice_id.clone(),
        };

        let response = self
            .client
            .post(self.url("get-performance-data"))
            .json(&request)
            .send()
            .await
            .map_err(|e| OcrError::Transport(format!("Failed to fetch performance data: {}", e)))?;

        if !response.status().is_success() {
            return Err(OcrError::Transport(error_message(response).await));
        }

        response
            .json::<PerformanceData>()
            .await
            .map_err(|e| OcrError::MalformedResponse(format!("Failed to parse performance data: {}", e)))
    }
}
