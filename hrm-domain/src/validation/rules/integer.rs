use serde_json::Value;

use crate::validation::Rule;

/// 整数规则
///
/// 与 [`IntType`](crate::validation::IntType) 不同，同时接受整数字符串（查询参数均以字符串形式到达）。
/// 小数、指数写法（如 `"1e3"`）与非数字输入均不通过。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Integer;

impl Integer {
    pub const NAME: &'static str = "Integer";
}

impl Rule for Integer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, input: &Value) -> bool {
        match input {
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>().is_ok() || s.parse::<u64>().is_ok()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer() {
        assert!(Integer.validate(&json!(0)));
        assert!(Integer.validate(&json!(-7)));
        assert!(Integer.validate(&json!(u64::MAX)));
        assert!(Integer.validate(&json!("42")));
        assert!(Integer.validate(&json!(" 3 ")));
        assert!(!Integer.validate(&json!(2.5)));
        assert!(!Integer.validate(&json!("1.5")));
        assert!(!Integer.validate(&json!("1e3")));
        assert!(!Integer.validate(&json!("")));
        assert!(!Integer.validate(&json!(true)));
        assert!(!Integer.validate(&Value::Null));
    }
}
