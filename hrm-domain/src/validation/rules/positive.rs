use serde_json::Value;

use crate::validation::Rule;

/// 正数规则
///
/// 接受 JSON 数字与数字字符串（查询参数均以字符串形式到达），值必须大于 0。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Positive;

impl Positive {
    pub const NAME: &'static str = "Positive";
}

impl Rule for Positive {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, input: &Value) -> bool {
        let n = match input {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        n.is_some_and(|n| n.is_finite() && n > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positive() {
        assert!(Positive.validate(&json!(1)));
        assert!(Positive.validate(&json!(0.5)));
        assert!(Positive.validate(&json!("42")));
        assert!(!Positive.validate(&json!(0)));
        assert!(!Positive.validate(&json!(-3)));
        assert!(!Positive.validate(&json!("abc")));
        assert!(!Positive.validate(&json!("inf")));
        assert!(!Positive.validate(&json!(true)));
        assert!(!Positive.validate(&Value::Null));
    }
}
