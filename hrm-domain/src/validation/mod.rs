//! 校验规则引擎
//!
//! - [`Rule`]：对单个输入值评估一条约束，只返回 `bool`；
//! - [`is_empty`]：所有规则共享的空值定义；
//! - 具体规则：[`Required`]、[`Length`]、[`Positive`]、[`Integer`]、[`In`] 与类型规则；
//! - [`ParamRuleCollection`]：按请求参数组合规则链并汇总失败信息。
//!
mod is_empty;
mod param_rule;
mod rule;
mod rules;

pub use is_empty::is_empty;
pub use param_rule::{
    ParamError, ParamRule, ParamRuleCollection, UNEXPECTED_PARAM, ValidationErrors,
};
pub use rule::{AllOf, AnyOf, Not, Rule};
pub use rules::{BoolType, In, IntType, Integer, Length, Positive, Required, StringType};
