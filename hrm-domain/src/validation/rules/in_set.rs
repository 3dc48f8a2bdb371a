use serde_json::Value;

use crate::validation::Rule;

/// 枚举取值规则：输入必须严格等于给定集合中的某个值（不做类型转换）
#[derive(Debug, Clone, PartialEq)]
pub struct In {
    values: Vec<Value>,
}

impl In {
    pub const NAME: &'static str = "In";

    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Rule for In {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, input: &Value) -> bool {
        self.values.contains(input)
    }
}
