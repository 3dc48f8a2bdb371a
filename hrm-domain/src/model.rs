//! 投影模型（Normalizable Model）
//!
//! 将一个实体实例与一组有序的字段过滤列表绑定，归一化为只包含声明字段的有序映射，
//! 供序列化层输出为接口响应。
//!
//! - 结果的键集合与过滤列表完全一致，顺序与声明顺序一致；
//! - 实体上未列出的属性永远不会出现在结果中（存储层多取的数据不得泄露到接口）；
//! - 过滤列表中的字段在实体上不存在时返回 [`DomainError::Configuration`]，
//!   属于编程错误，应由测试在开发阶段发现；
//! - 归一化只读取实体，不产生副作用，多次调用结果相同。
//!
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::attribute::Attributes;
use crate::error::{DomainError, DomainResult};
use crate::schema::ModelSchema;

/// 归一化结果（DTO）
///
/// 字段名 -> 值 的有序映射，构造后不可变；序列化时等同于一个 JSON 对象。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedModel(Map<String, Value>);

impl NormalizedModel {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// 字段名（声明顺序）
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 转换为 JSON 对象
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<NormalizedModel> for Value {
    fn from(model: NormalizedModel) -> Self {
        model.into_value()
    }
}

/// 按过滤列表归一化任意可读属性的实体
pub fn normalize<E>(entity: &E, filters: &[&str]) -> DomainResult<NormalizedModel>
where
    E: Attributes,
{
    let mut map = Map::with_capacity(filters.len());

    for field in filters {
        if map.contains_key(*field) {
            warn!(entity = E::ENTITY, field, "filter declared more than once");
            return Err(DomainError::DuplicateFilter {
                entity: E::ENTITY,
                field: field.to_string(),
            });
        }

        let value = entity.read_attribute(field).inspect_err(|err| {
            warn!(entity = E::ENTITY, field, error = %err, "failed to read attribute");
        })?;
        map.insert(field.to_string(), value);
    }

    debug!(entity = E::ENTITY, fields = filters.len(), "entity normalized");

    Ok(NormalizedModel(map))
}

/// 在没有实体实例的情况下校验过滤列表与实体访问表是否一致
pub fn verify_filters<E>(filters: &[&str]) -> DomainResult<()>
where
    E: Attributes,
{
    for (idx, field) in filters.iter().enumerate() {
        if filters[..idx].contains(field) {
            return Err(DomainError::DuplicateFilter {
                entity: E::ENTITY,
                field: field.to_string(),
            });
        }
        if !E::has_attribute(field) {
            return Err(DomainError::Configuration {
                entity: E::ENTITY,
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

/// 可归一化的 DTO 模型
///
/// 每个模型类型绑定一种实体与一组字段；同一实体可以被多个模型以不同字段列表绑定。
/// 通常由 `#[model(entity = .., filters = [..])]` 宏生成实现。
pub trait Normalizable {
    /// 绑定的实体类型
    type Entity: Attributes;

    /// 接口文档中的 schema 名称
    const SCHEMA: &'static str;

    /// 字段过滤列表（有序）
    fn filters() -> &'static [&'static str];

    /// 绑定的实体实例
    fn entity(&self) -> &Self::Entity;

    /// 归一化为 DTO
    fn normalize(&self) -> DomainResult<NormalizedModel> {
        normalize(self.entity(), Self::filters())
    }

    /// 校验字段声明与实体结构一致
    fn verify() -> DomainResult<()> {
        verify_filters::<Self::Entity>(Self::filters())
    }

    /// 接口文档元数据
    fn schema() -> ModelSchema
    where
        Self: Sized,
    {
        ModelSchema::of::<Self>()
    }
}
