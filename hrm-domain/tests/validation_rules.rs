use hrm_domain::validation::{
    In, IntType, Length, ParamRule, ParamRuleCollection, Positive, Required, Rule, StringType,
    is_empty,
};
use serde_json::{Value, json};

#[test]
fn required_without_empty_string_exclusion() {
    let rule = Required::new(false);
    assert!(!rule.validate(&Value::Null));
    assert!(!rule.validate(&json!("")));
    assert!(rule.validate(&json!("x")));
    assert!(!rule.validate(&json!([])));
}

#[test]
fn required_with_empty_string_exclusion() {
    let rule = Required::new(true);
    assert!(rule.validate(&json!("")));
    assert!(!rule.validate(&Value::Null));
}

// 所有规则共享同一个空值定义
#[test]
fn required_agrees_with_shared_emptiness() {
    let rule = Required::default();
    let samples = [
        Value::Null,
        json!(""),
        json!(" "),
        json!(0),
        json!(false),
        json!([]),
        json!([1]),
        json!({}),
        json!({"k": 1}),
    ];
    for input in samples.iter() {
        assert_eq!(rule.validate(input), !is_empty(input), "input: {input}");
    }
}

#[test]
fn rules_compose_into_chains() {
    let sort_order = Required::default().and(In::new(["ASC", "DESC"]));
    assert!(sort_order.validate(&json!("ASC")));
    assert!(!sort_order.validate(&json!("")));

    let id_or_name = IntType.and(Positive).or(StringType.and(Length::max(3)));
    assert!(id_or_name.validate(&json!(5)));
    assert!(id_or_name.validate(&json!("BSc")));
    assert!(!id_or_name.validate(&json!(-5)));
    assert!(!id_or_name.validate(&json!("Bachelor")));
}

#[test]
fn rules_are_shareable_across_threads() {
    let rules = ParamRuleCollection::new(vec![
        ParamRule::new("name")
            .rule(Required::default())
            .rule(Length::max(100)),
    ]);

    std::thread::scope(|s| {
        for i in 0..4 {
            let rules = &rules;
            s.spawn(move || {
                let payload = json!({ "name": format!("Education {i}") });
                assert!(rules.validate(&payload).is_ok());
            });
        }
    });
}
