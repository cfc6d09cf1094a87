use indexmap::IndexSet;

use crate::models::{ClassificationResult, ExtractedFields};

/// 发票判定的评分规则 (权重、关键词、阈值)
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRules {
    /// 按顺序累加的字段权重
    pub field_weights: Vec<(String, f64)>,
    /// 关键词命中一次的加分
    pub keyword_weight: f64,
    pub keywords: Vec<String>,
    /// score >= threshold 判定为发票
    pub threshold: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        let field_weights = [
            // 关键字段
            ("invoice_number", 3.0),
            ("total_price", 3.0),
            ("iban", 2.0),
            // 辅助字段
            ("var_symbol", 1.0),
            ("due_date", 1.0),
            ("buyer_ico", 1.0),
            ("supplier_ico", 1.0),
            ("bank", 1.0),
            ("swift", 1.0),
        ];
        let keywords = [
            "faktúra", "faktura", "invoice",
            "daňový doklad", "danovy doklad",
            "dodávateľ", "dodavatel", "supplier",
            "odberateľ", "odberatel", "customer",
            "dph", "vat", "ičo", "ico",
        ];

        Self {
            field_weights: field_weights
                .iter()
                .map(|(name, w)| (name.to_string(), *w))
                .collect(),
            keyword_weight: 0.5,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            threshold: 4.0,
        }
    }
}

/// 发票判定器 (纯函数, 无内部状态)
#[derive(Debug, Clone)]
pub struct InvoiceClassifier {
    field_weights: Vec<(String, f64)>,
    keyword_weight: f64,
    /// 小写、去重后的关键词
    keywords: IndexSet<String>,
    threshold: f64,
}

impl Default for InvoiceClassifier {
    fn default() -> Self {
        Self::new(ScoringRules::default())
    }
}

impl InvoiceClassifier {
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            field_weights: rules.field_weights,
            keyword_weight: rules.keyword_weight,
            keywords: rules.keywords.iter().map(|k| k.to_lowercase()).collect(),
            threshold: rules.threshold,
        }
    }

    /// 字段加权 + 原文关键词扫描
    pub fn classify(&self, fields: &ExtractedFields, raw_text: &str) -> ClassificationResult {
        let mut score = 0.0;

        for (name, weight) in &self.field_weights {
            if fields.is_present(name) {
                score += weight;
                tracing::debug!("+{} for {}", weight, name);
            }
        }

        if !raw_text.is_empty() {
            let lower_text = raw_text.to_lowercase();
            for keyword in &self.keywords {
                if lower_text.contains(keyword.as_str()) {
                    score += self.keyword_weight;
                    tracing::debug!("+{} for keyword: {}", self.keyword_weight, keyword);
                }
            }
        }

        let is_invoice = score >= self.threshold;
        tracing::info!("Invoice score {} (threshold {}): is_invoice={}", score, self.threshold, is_invoice);

        ClassificationResult { score, is_invoice }
    }
}
