//! HRM 领域层基础库（hrm-domain）
//!
//! 提供接口层与持久化层之间两类相互独立的叶子构件：
//! - 投影模型（`attribute` / `model` / `schema`）：把实体按声明的字段列表
//!   归一化为有序的键值映射（DTO），只暴露声明字段；
//! - 校验规则引擎（`validation`）：可组合的单值校验规则，返回通过与否。
//!
//! 两者都是纯同步计算，不持有共享可变状态，可在多个请求间并发调用。
//!
//! 典型用法：
//! 1. 使用 `#[entity]` 或 `#[derive(Attributes)]` 为实体生成属性访问表；
//! 2. 使用 `#[model(entity = .., filters = [..])]` 声明 DTO 模型并调用 `normalize`；
//! 3. 使用 `ParamRuleCollection` 在持久化之前校验请求负载。
//!
pub mod attribute;
pub mod entity;
pub mod error;
pub mod model;
pub mod schema;
pub mod validation;

pub use attribute::{AttributeKind, AttributeType, Attributes};
pub use error::{DomainError, DomainResult};
pub use model::{Normalizable, NormalizedModel, normalize};

// 允许在本 crate 内部通过 ::hrm_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::hrm_domain 路径。
extern crate self as hrm_domain;
