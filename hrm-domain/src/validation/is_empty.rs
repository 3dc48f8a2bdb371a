use serde_json::Value;

/// 共享的「空值」定义，所有需要判空的规则必须复用此函数
///
/// 视为空：
/// - `null`（缺失值）
/// - 空字符串 `""`
/// - 空数组 `[]` 与空对象 `{}`
///
/// 不视为空：`0`、`0.0`、`false`、只含空白的字符串。
/// 数字零与布尔假是有效的业务取值（例如复选框未勾选）；
/// 空白字符串是否可接受由具体规则（如 `Length`）决定。
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_values() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
    }

    // 测试零值、假值与空白字符串不视为空
    #[test]
    fn test_non_empty_values() {
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(0.0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!(" ")));
        assert!(!is_empty(&json!("x")));
        assert!(!is_empty(&json!([null])));
        assert!(!is_empty(&json!({"a": null})));
    }
}
