use bon::Builder;
use serde_json::Value;

use crate::validation::{Rule, is_empty};

/// 必填规则
///
/// - `exclude_empty_string = false`（默认）：输入不能为空（见 [`is_empty`]）；
/// - `exclude_empty_string = true`：只要求输入不是 `null`，空字符串视为有效。
///
/// ```
/// use hrm_domain::validation::{Required, Rule};
/// use serde_json::json;
///
/// let rule = Required::builder().exclude_empty_string(true).build();
/// assert!(rule.validate(&json!("")));
/// assert!(!rule.validate(&json!(null)));
/// ```
#[derive(Builder, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Required {
    #[builder(default)]
    exclude_empty_string: bool,
}

impl Required {
    pub const NAME: &'static str = "Required";

    pub const fn new(exclude_empty_string: bool) -> Self {
        Self {
            exclude_empty_string,
        }
    }

    pub fn excludes_empty_string(&self) -> bool {
        self.exclude_empty_string
    }
}

impl Rule for Required {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, input: &Value) -> bool {
        if self.exclude_empty_string {
            return !input.is_null();
        }
        !is_empty(input)
    }
}
