use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 发票 ID (由持久化方分配, 对本层不透明: 原样保存后端给出的 JSON 值)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Value);

impl InvoiceId {
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<i64> for InvoiceId {
    fn from(id: i64) -> Self {
        InvoiceId(Value::from(id))
    }
}

impl From<&str> for InvoiceId {
    fn from(id: &str) -> Self {
        InvoiceId(Value::from(id))
    }
}

/// OCR 后端解析出的发票字段 (parsed_data), 保留后端返回顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedFields(IndexMap<String, Value>);

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// 字段是否"存在": 缺失、null、false、0、空字符串都算未找到
    pub fn is_present(&self, name: &str) -> bool {
        match self.0.get(name) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map_or(true, |v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// 附加发票 ID 后的副本 (返回给调用方展示用)
    pub fn with_id(&self, invoice_id: Option<&InvoiceId>) -> Self {
        let mut fields = self.clone();
        let id = invoice_id.map(|id| id.as_value().clone()).unwrap_or(Value::Null);
        fields.0.insert("id".to_string(), id);
        fields
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ExtractedFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
