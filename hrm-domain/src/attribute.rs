//! 具名属性读取能力（Attributes）
//!
//! 投影层按名称读取实体属性，但不依赖运行时反射：
//! 每个实体类型在编译期生成一张「属性名 -> 读取函数」的访问表，
//! 通常由 `#[derive(Attributes)]` 或 `#[entity]` 宏生成，也可手写实现。
//!
use serde::Serialize;
pub use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// 属性的 JSON 类型（用于生成接口文档的静态元数据）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Integer,
    Number,
    String,
    Boolean,
    Array,
    Object,
}

impl AttributeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Integer => "integer",
            AttributeKind::Number => "number",
            AttributeKind::String => "string",
            AttributeKind::Boolean => "boolean",
            AttributeKind::Array => "array",
            AttributeKind::Object => "object",
        }
    }
}

/// 属性类型：JSON 类型 + 是否可为空
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeType {
    pub kind: AttributeKind,
    pub nullable: bool,
}

impl AttributeType {
    pub const fn new(kind: AttributeKind, nullable: bool) -> Self {
        Self { kind, nullable }
    }
}

/// 可按名称读取属性的实体
///
/// - `attribute_names` 按声明顺序列出全部可读属性；
/// - `read_attribute` 读取单个属性并转换为 JSON 值，不修改实体；
/// - 读取未声明的属性返回 [`DomainError::Configuration`]。
pub trait Attributes {
    /// 实体类型名（用于诊断信息）
    const ENTITY: &'static str;

    /// 全部可读属性名（声明顺序）
    fn attribute_names() -> &'static [&'static str];

    /// 属性的静态类型信息；未知属性返回 `None`
    fn attribute_type(name: &str) -> Option<AttributeType>;

    /// 按名称读取属性
    fn read_attribute(&self, name: &str) -> DomainResult<Value>;

    /// 是否存在指定名称的可读属性
    fn has_attribute(name: &str) -> bool {
        Self::attribute_names().iter().any(|n| *n == name)
    }
}

/// 将字段值转换为属性值（供宏生成代码使用）
pub fn to_attribute<T>(value: &T) -> DomainResult<Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

/// 构造「属性不存在」错误（供宏生成代码使用）
pub fn unknown_attribute<E: Attributes>(name: &str) -> DomainError {
    DomainError::Configuration {
        entity: E::ENTITY,
        field: name.to_string(),
    }
}
