use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout, Instant};

use super::classifier::InvoiceClassifier;
use super::reconciler::reconcile;
use crate::client::OcrGateway;
use crate::error::OcrError;
use crate::models::{Document, InvoiceId, OcrBackend, PersistenceStatus, SubmissionOutcome, TimingRecord};

/// OCR 提交编排: 调用后端 -> 耗时拆分 + 发票判定 -> 按判定结果保存耗时
///
/// 不跨调用保存任何状态, 可并发处理不同文档。
pub struct OcrRequestCoordinator {
    gateway: Arc<dyn OcrGateway>,
    classifier: InvoiceClassifier,
    dispatch_timeout: Duration,
}

impl OcrRequestCoordinator {
    pub fn new(gateway: Arc<dyn OcrGateway>, classifier: InvoiceClassifier, dispatch_timeout: Duration) -> Self {
        Self {
            gateway,
            classifier,
            dispatch_timeout,
        }
    }

    pub async fn submit(&self, document: &Document, backend: OcrBackend) -> Result<SubmissionOutcome, OcrError> {
        // 计时只包住 OCR 调用本身
        let started = Instant::now();
        let dispatched = timeout(self.dispatch_timeout, self.gateway.recognize(backend, document)).await;
        let measured = started.elapsed().as_secs_f64();

        let raw = match dispatched {
            Ok(result) => result,
            Err(_) => Err(OcrError::Transport(format!(
                "{} did not answer within {:?}",
                backend, self.dispatch_timeout
            ))),
        }
        .inspect_err(|e| tracing::error!("OCR dispatch for {} failed: {}", document.file_name, e))?;

        let response = raw
            .validate()
            .inspect_err(|e| tracing::error!("Rejecting {} response: {}", backend, e))?;

        let timing = reconcile(measured, response.recognition_seconds, response.parsing_seconds);
        let classification = self.classifier.classify(&response.parsed_data, &response.text);

        tracing::info!(
            "{} via {}: measured {:.3}s, recognition {:.3}s, parsing {:.3}s, other {:.3}s",
            document.file_name,
            backend,
            timing.total_seconds,
            timing.recognition_seconds,
            timing.parsing_seconds,
            timing.other_seconds
        );

        let persistence = if classification.is_invoice {
            self.persist_timing(response.invoice_id.as_ref(), &timing).await
        } else {
            tracing::info!("{} is not an invoice, timing not saved", document.file_name);
            PersistenceStatus::Skipped
        };

        Ok(SubmissionOutcome {
            backend,
            extracted_fields: response.parsed_data.with_id(response.invoice_id.as_ref()),
            text: response.text,
            invoice_id: response.invoice_id,
            classification,
            timing,
            persistence,
            completed_at: Utc::now(),
        })
    }

    /// 保存失败只记录在结果里, 不影响已完成的识别
    async fn persist_timing(&self, invoice_id: Option<&InvoiceId>, timing: &TimingRecord) -> PersistenceStatus {
        let Some(invoice_id) = invoice_id else {
            tracing::warn!("Invoice detected but response carried no invoice_id, timing not saved");
            return PersistenceStatus::Failed {
                reason: "response carried no invoice_id".to_string(),
            };
        };

        match self.gateway.save_time_other(invoice_id, timing.other_seconds).await {
            Ok(()) => {
                tracing::info!("Saved time_other {:.3}s for invoice {}", timing.other_seconds, invoice_id);
                PersistenceStatus::Saved
            }
            Err(e) => {
                tracing::warn!("Invoice {}: {}", invoice_id, e);
                PersistenceStatus::Failed { reason: e.to_string() }
            }
        }
    }
}
