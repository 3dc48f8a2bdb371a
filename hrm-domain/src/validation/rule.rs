use serde_json::Value;

/// 校验规则的核心 trait
///
/// 对单个输入值评估一条约束，只返回是否通过：
/// - `validate` 是输入与构造时配置的纯函数，无副作用、无隐藏状态；
/// - 不通过是正常的 `false`，不是错误；
/// - 规则配置在构造后不可变，可在多线程间共享。
pub trait Rule: Send + Sync {
    /// 规则名称（用于错误汇总）
    fn name(&self) -> &'static str;

    /// 检查输入是否满足规则
    fn validate(&self, input: &Value) -> bool;

    /// 与另一条规则进行 AND 组合
    fn and<R>(self, other: R) -> AllOf
    where
        Self: Sized + 'static,
        R: Rule + 'static,
    {
        AllOf::new(vec![Box::new(self), Box::new(other)])
    }

    /// 与另一条规则进行 OR 组合
    fn or<R>(self, other: R) -> AnyOf
    where
        Self: Sized + 'static,
        R: Rule + 'static,
    {
        AnyOf::new(vec![Box::new(self), Box::new(other)])
    }

    /// 对规则取反
    fn not(self) -> Not
    where
        Self: Sized + 'static,
    {
        Not::new(Box::new(self))
    }
}

/// 使得可以直接使用 Box 类型的规则
impl Rule for Box<dyn Rule> {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn validate(&self, input: &Value) -> bool {
        self.as_ref().validate(input)
    }
}

/// 全部规则通过时才通过
pub struct AllOf {
    rules: Vec<Box<dyn Rule>>,
}

impl AllOf {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }
}

impl Rule for AllOf {
    fn name(&self) -> &'static str {
        "AllOf"
    }

    fn validate(&self, input: &Value) -> bool {
        self.rules.iter().all(|r| r.validate(input))
    }
}

/// 任意一条规则通过即通过
pub struct AnyOf {
    rules: Vec<Box<dyn Rule>>,
}

impl AnyOf {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }
}

impl Rule for AnyOf {
    fn name(&self) -> &'static str {
        "AnyOf"
    }

    fn validate(&self, input: &Value) -> bool {
        self.rules.iter().any(|r| r.validate(input))
    }
}

/// 内部规则不通过时才通过
pub struct Not {
    inner: Box<dyn Rule>,
}

impl Not {
    pub fn new(inner: Box<dyn Rule>) -> Self {
        Self { inner }
    }
}

impl Rule for Not {
    fn name(&self) -> &'static str {
        "Not"
    }

    fn validate(&self, input: &Value) -> bool {
        !self.inner.validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct AlwaysTrue;
    impl Rule for AlwaysTrue {
        fn name(&self) -> &'static str {
            "AlwaysTrue"
        }
        fn validate(&self, _: &Value) -> bool {
            true
        }
    }

    struct AlwaysFalse;
    impl Rule for AlwaysFalse {
        fn name(&self) -> &'static str {
            "AlwaysFalse"
        }
        fn validate(&self, _: &Value) -> bool {
            false
        }
    }

    #[test]
    fn test_and_rule() {
        let input = json!(42);
        assert!(AlwaysTrue.and(AlwaysTrue).validate(&input));
        assert!(!AlwaysTrue.and(AlwaysFalse).validate(&input));
        assert!(!AlwaysFalse.and(AlwaysFalse).validate(&input));
    }

    #[test]
    fn test_or_rule() {
        let input = json!(42);
        assert!(AlwaysTrue.or(AlwaysTrue).validate(&input));
        assert!(AlwaysTrue.or(AlwaysFalse).validate(&input));
        assert!(!AlwaysFalse.or(AlwaysFalse).validate(&input));
    }

    #[test]
    fn test_not_rule() {
        let input = json!(42);
        assert!(!AlwaysTrue.not().validate(&input));
        assert!(AlwaysFalse.not().validate(&input));
    }

    #[test]
    fn test_complex_combination() {
        // (TRUE AND FALSE) OR (NOT FALSE) = FALSE OR TRUE = TRUE
        let rule = AlwaysTrue.and(AlwaysFalse).or(AlwaysFalse.not());
        assert!(rule.validate(&Value::Null));
        assert_eq!(rule.name(), "AnyOf");
    }

    #[test]
    fn test_boxed_rule() {
        let boxed: Box<dyn Rule> = Box::new(AlwaysFalse);
        assert_eq!(boxed.name(), "AlwaysFalse");
        assert!(boxed.not().validate(&Value::Null));
    }

    #[test]
    fn test_empty_groups() {
        assert!(AllOf::new(vec![]).validate(&Value::Null));
        assert!(!AnyOf::new(vec![]).validate(&Value::Null));
    }
}
