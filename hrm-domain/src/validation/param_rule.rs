//! 请求参数规则集
//!
//! 将多条规则按参数名组合为规则链，对请求负载（JSON 对象）做整体校验，
//! 并把每个参数未通过的规则名汇总为 [`ValidationErrors`]。
//!
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::validation::Rule;

/// 严格模式下出现未声明参数时记录的规则名
pub const UNEXPECTED_PARAM: &str = "UnexpectedParam";

/// 单个参数及其规则链
pub struct ParamRule {
    param: String,
    rules: Vec<Box<dyn Rule>>,
    optional: bool,
}

impl ParamRule {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            rules: Vec::new(),
            optional: false,
        }
    }

    /// 追加一条规则（按追加顺序评估）
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// 标记为可选：参数缺失或为 `null` 时跳过全部规则
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// 返回未通过的规则名（缺失参数按 `null` 处理）
    pub fn check(&self, input: Option<&Value>) -> Vec<&'static str> {
        let input = input.unwrap_or(&Value::Null);
        if self.optional && input.is_null() {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter(|r| !r.validate(input))
            .map(|r| r.name())
            .collect()
    }
}

impl fmt::Debug for ParamRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.rules.iter().map(|r| r.name()).collect();
        f.debug_struct("ParamRule")
            .field("param", &self.param)
            .field("rules", &names)
            .field("optional", &self.optional)
            .finish()
    }
}

/// 参数规则集合
#[derive(Debug, Default)]
pub struct ParamRuleCollection {
    rules: Vec<ParamRule>,
    strict: bool,
}

impl ParamRuleCollection {
    pub fn new(rules: Vec<ParamRule>) -> Self {
        Self {
            rules,
            strict: false,
        }
    }

    /// 严格模式：拒绝未声明的参数
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn add(mut self, rule: ParamRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(ParamRule::param)
    }

    /// 校验请求负载；非对象负载视为不含任何参数
    pub fn validate(&self, payload: &Value) -> Result<(), ValidationErrors> {
        let object = payload.as_object();
        let mut errors = ValidationErrors::default();

        for rule in &self.rules {
            let input = object.and_then(|o| o.get(rule.param()));
            let failed = rule.check(input);
            if !failed.is_empty() {
                errors.push(rule.param(), failed);
            }
        }

        if let (true, Some(object)) = (self.strict, object) {
            for key in object.keys() {
                if !self.rules.iter().any(|r| r.param() == key) {
                    errors.push(key, vec![UNEXPECTED_PARAM]);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            debug!(params = %errors, "request parameters failed validation");
            Err(errors)
        }
    }
}

/// 单个参数的校验失败信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamError {
    pub param: String,
    pub failed: Vec<&'static str>,
}

/// 校验失败汇总（按规则声明顺序，严格模式下的多余参数排在最后）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ParamError>,
}

impl ValidationErrors {
    fn push(&mut self, param: &str, failed: Vec<&'static str>) {
        self.errors.push(ParamError {
            param: param.to_string(),
            failed,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, param: &str) -> Option<&[&'static str]> {
        self.errors
            .iter()
            .find(|e| e.param == param)
            .map(|e| e.failed.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.errors.iter().map(|e| e.param.as_str()).collect();
        write!(f, "invalid parameters: {}", params.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Length, Positive, Required};
    use serde_json::json;

    fn education_rules() -> ParamRuleCollection {
        ParamRuleCollection::new(vec![
            ParamRule::new("name")
                .rule(Required::default())
                .rule(Length::max(5)),
        ])
    }

    #[test]
    fn test_valid_payload() {
        assert!(education_rules().validate(&json!({"name": "BSc"})).is_ok());
    }

    #[test]
    fn test_missing_param_reads_as_null() {
        let errors = education_rules().validate(&json!({})).unwrap_err();
        assert_eq!(errors.get("name"), Some(&["Required", "Length"][..]));
    }

    #[test]
    fn test_rule_order_is_kept() {
        let errors = education_rules()
            .validate(&json!({"name": "Bachelor"}))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some(&["Length"][..]));
        assert_eq!(errors.to_string(), "invalid parameters: name");
    }

    #[test]
    fn test_optional_param() {
        let rules = ParamRuleCollection::new(vec![ParamRule::new("limit").rule(Positive).optional()]);
        assert!(rules.validate(&json!({})).is_ok());
        assert!(rules.validate(&json!({"limit": null})).is_ok());
        assert!(rules.validate(&json!({"limit": 0})).is_err());
    }

    #[test]
    fn test_strict_rejects_unknown_params() {
        let rules = education_rules().strict(true);
        let errors = rules
            .validate(&json!({"name": "BSc", "level": 1}))
            .unwrap_err();
        assert_eq!(errors.get("level"), Some(&[UNEXPECTED_PARAM][..]));
        assert!(errors.get("name").is_none());

        assert!(education_rules().validate(&json!({"name": "BSc", "level": 1})).is_ok());
    }

    #[test]
    fn test_non_object_payload() {
        let errors = education_rules().validate(&json!("BSc")).unwrap_err();
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn test_errors_serialize() {
        let errors = education_rules().validate(&json!({"name": ""})).unwrap_err();
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!([{"param": "name", "failed": ["Required"]}])
        );
    }
}
