//! 模型 schema 元数据
//!
//! 由模型的字段列表与实体属性类型推导，仅用于生成接口文档，不参与任何行为。
//!
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::attribute::{AttributeKind, Attributes};
use crate::model::Normalizable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaProperty {
    pub name: &'static str,
    /// 字段在实体上不存在时为 `None`（配置错误由 `Normalizable::verify` 报告）
    pub kind: Option<AttributeKind>,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSchema {
    pub name: &'static str,
    pub properties: Vec<SchemaProperty>,
}

impl ModelSchema {
    pub fn of<M: Normalizable>() -> Self {
        let properties = M::filters()
            .iter()
            .map(|field| {
                let ty = <M::Entity as Attributes>::attribute_type(field);
                SchemaProperty {
                    name: *field,
                    kind: ty.map(|t| t.kind),
                    nullable: ty.map(|t| t.nullable).unwrap_or(false),
                }
            })
            .collect();

        Self {
            name: M::SCHEMA,
            properties,
        }
    }

    pub fn property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// 渲染为 OpenAPI 风格的 schema 对象
    pub fn to_openapi(&self) -> Value {
        let mut props = Map::new();
        for p in &self.properties {
            let mut prop = Map::new();
            if let Some(kind) = p.kind {
                prop.insert("type".into(), json!(kind.as_str()));
            }
            if p.nullable {
                prop.insert("nullable".into(), json!(true));
            }
            props.insert(p.name.to_string(), Value::Object(prop));
        }

        json!({
            "schema": self.name,
            "type": "object",
            "properties": props,
        })
    }
}
