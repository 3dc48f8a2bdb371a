use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::validation::Rule;

/// 字符串长度规则（按字符计，闭区间）
///
/// 非字符串输入不通过。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
}

impl Length {
    pub const NAME: &'static str = "Length";

    /// `min > max` 属于规则误用，在构造时报告
    pub fn new(min: Option<usize>, max: Option<usize>) -> DomainResult<Self> {
        match (min, max) {
            (Some(lo), Some(hi)) if lo > hi => Err(DomainError::InvalidRule {
                rule: Self::NAME,
                reason: format!("min ({lo}) is greater than max ({hi})"),
            }),
            _ => Ok(Self { min, max }),
        }
    }

    pub const fn max(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub const fn min(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn between(min: usize, max: usize) -> DomainResult<Self> {
        Self::new(Some(min), Some(max))
    }
}

impl Rule for Length {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, input: &Value) -> bool {
        let Value::String(s) = input else {
            return false;
        };
        let len = s.chars().count();
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }
}
