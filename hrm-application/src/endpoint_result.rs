//! 接口响应载体
//!
//! 单个资源与资源集合的统一响应结构，序列化为：
//! `{"data": ..., "meta": {...}, "rels": []}`。
//! `data` 只来自 `Normalizable` 模型的归一化结果，实体本身不会被直接序列化。
//!
use hrm_domain::error::DomainResult;
use hrm_domain::model::{Normalizable, NormalizedModel};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::dto::Dto;

/// 集合结果中记录总数的 meta 键
pub const META_TOTAL: &str = "total";

/// 单个资源的响应
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EndpointResourceResult {
    data: NormalizedModel,
    meta: Map<String, Value>,
    rels: Vec<Value>,
}

impl EndpointResourceResult {
    pub fn new<M: Normalizable>(model: &M) -> DomainResult<Self> {
        Ok(Self {
            data: model.normalize()?,
            meta: Map::new(),
            rels: Vec::new(),
        })
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn data(&self) -> &NormalizedModel {
        &self.data
    }

    pub fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }
}

impl Dto for EndpointResourceResult {}

/// 资源集合的响应
///
/// `meta.total` 默认为本页记录数，分页查询应通过 [`with_total`](Self::with_total) 写入总数。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EndpointCollectionResult {
    data: Vec<NormalizedModel>,
    meta: Map<String, Value>,
    rels: Vec<Value>,
}

impl EndpointCollectionResult {
    pub fn new<M, I>(models: I) -> DomainResult<Self>
    where
        M: Normalizable,
        I: IntoIterator<Item = M>,
    {
        let data = models
            .into_iter()
            .map(|m| m.normalize())
            .collect::<DomainResult<Vec<_>>>()?;

        let mut meta = Map::new();
        meta.insert(META_TOTAL.to_string(), Value::from(data.len()));

        Ok(Self {
            data,
            meta,
            rels: Vec::new(),
        })
    }

    pub fn with_total(self, total: usize) -> Self {
        self.with_meta(META_TOTAL, total)
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn data(&self) -> &[NormalizedModel] {
        &self.data
    }

    pub fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }

    pub fn total(&self) -> Option<u64> {
        self.meta.get(META_TOTAL).and_then(Value::as_u64)
    }
}

impl Dto for EndpointCollectionResult {}
