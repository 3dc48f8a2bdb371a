use serde_json::Value;

use crate::validation::Rule;

/// 字符串类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringType;

impl Rule for StringType {
    fn name(&self) -> &'static str {
        "StringType"
    }

    fn validate(&self, input: &Value) -> bool {
        input.is_string()
    }
}

/// 整数类型（不接受小数与数字字符串）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntType;

impl Rule for IntType {
    fn name(&self) -> &'static str {
        "IntType"
    }

    fn validate(&self, input: &Value) -> bool {
        input.is_i64() || input.is_u64()
    }
}

/// 布尔类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolType;

impl Rule for BoolType {
    fn name(&self) -> &'static str {
        "BoolType"
    }

    fn validate(&self, input: &Value) -> bool {
        input.is_boolean()
    }
}
