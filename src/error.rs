use axum::http::StatusCode;

/// OCR 链路错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OcrError {
    /// 网络/后端调用失败、不可达或超时
    #[error("OCR backend transport error: {0}")]
    Transport(String),

    /// 响应缺少必需的 text / time 字段
    #[error("Malformed OCR response: {0}")]
    MalformedResponse(String),

    /// save-time-other 调用失败
    #[error("Failed to persist timing: {0}")]
    PersistenceFailure(String),
}

impl OcrError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Transport(_) | Self::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            Self::PersistenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
