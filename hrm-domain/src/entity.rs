//! 实体（Entity）基础抽象
//!
//! 由持久化层拥有的领域记录，核心层只读取其标识与具名属性。
//!
use std::fmt::Display;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可显示与可克隆
    type Id: Clone + Display;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attributes;
    use crate::model::Normalizable;
    use hrm_macros::{entity, model};

    #[entity]
    struct JobTitle {
        title: String,
        description: Option<String>,
        #[attribute(skip)]
        is_deleted: bool,
    }

    #[model(entity = JobTitle, filters = ["id", "title", "description"])]
    struct JobTitleModel;

    // 测试宏生成的实体在本 crate 内可用
    #[test]
    fn test_entity_macro_in_domain_crate() {
        let job = JobTitle {
            id: 12,
            title: "QA Engineer".into(),
            description: None,
            is_deleted: true,
        };
        assert_eq!(*job.id(), 12);
        assert!(job.is_deleted);
        assert!(!JobTitle::has_attribute("is_deleted"));

        let dto = JobTitleModel::new(&job).normalize().unwrap();
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"id":12,"title":"QA Engineer","description":null}"#
        );
    }
}
