//! 领域层统一错误定义
//!
//! 仅覆盖投影（归一化）与校验规则两类构件所需的最小集合：
//! - 配置错误：DTO 声明的字段与实体结构不一致，属于编程错误，应在测试阶段暴露；
//! - 规则误用：规则在构造时收到了不合法的配置；
//! - 序列化：读取属性时无法转换为 JSON 值。
//!
//! 注意：校验不通过不是错误，`Rule::validate` 只返回 `false`。
//!
use thiserror::Error;

/// 统一错误类型（领域层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 投影/归一化 ---
    #[error("configuration error: entity={entity} has no readable attribute '{field}'")]
    Configuration { entity: &'static str, field: String },
    #[error("configuration error: field '{field}' declared more than once for entity={entity}")]
    DuplicateFilter { entity: &'static str, field: String },
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // --- 校验规则 ---
    #[error("invalid rule configuration: rule={rule}, reason={reason}")]
    InvalidRule { rule: &'static str, reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// 是否为 DTO 声明与实体不一致导致的配置错误
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DomainError::Configuration { .. } | DomainError::DuplicateFilter { .. }
        )
    }
}
