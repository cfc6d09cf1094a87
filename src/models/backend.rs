use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// OCR 后端 (两种可互换的识别引擎)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OcrBackend {
    #[serde(alias = "tesseract")]
    Tesseract,
    #[serde(rename = "PaddleOCR", alias = "paddleOCR", alias = "paddleocr")]
    PaddleOcr,
}

impl OcrBackend {
    /// 后端接口路径 (POST {backend_url}/{path})
    pub fn path(&self) -> &'static str {
        match self {
            OcrBackend::Tesseract => "tesseract",
            OcrBackend::PaddleOcr => "paddleOCR",
        }
    }

    /// 展示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            OcrBackend::Tesseract => "Tesseract",
            OcrBackend::PaddleOcr => "PaddleOCR",
        }
    }
}

impl fmt::Display for OcrBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown OCR backend '{0}'")]
pub struct UnknownBackend(pub String);

impl FromStr for OcrBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tesseract" | "Tesseract" => Ok(OcrBackend::Tesseract),
            "paddleOCR" | "PaddleOCR" | "paddleocr" => Ok(OcrBackend::PaddleOcr),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

/// 上传字段类型: PDF 或图片
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Pdf,
    Image,
}

impl PayloadKind {
    /// 按媒体类型选择: application/pdf 走 pdf, 其余 (jpeg/png/webp/未知) 一律按图片处理
    pub fn for_media_type(content_type: &str) -> Self {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim();
        if essence.eq_ignore_ascii_case("application/pdf") {
            PayloadKind::Pdf
        } else {
            PayloadKind::Image
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            PayloadKind::Pdf => "pdf",
            PayloadKind::Image => "image",
        }
    }
}

/// 待识别文档
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn payload_kind(&self) -> PayloadKind {
        PayloadKind::for_media_type(&self.content_type)
    }
}
