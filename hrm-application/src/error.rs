use hrm_domain::error::DomainError;
use hrm_domain::validation::ValidationErrors;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validation: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("record not found: resource={resource}, id={id}")]
    RecordNotFound { resource: &'static str, id: String },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infra: {0}")]
    Infra(String),
}

impl AppError {
    /// 对应的 HTTP 状态码（由接口层使用）
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 422,
            AppError::RecordNotFound { .. } => 404,
            AppError::Conflict(_) => 409,
            AppError::Domain(_) | AppError::Infra(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrm_domain::validation::{ParamRule, ParamRuleCollection, Required};
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        let errors = ParamRuleCollection::new(vec![ParamRule::new("name").rule(Required::default())])
            .validate(&json!({}))
            .unwrap_err();
        assert_eq!(AppError::from(errors).status_code(), 422);

        let not_found = AppError::RecordNotFound {
            resource: "Education",
            id: "9".into(),
        };
        assert_eq!(not_found.status_code(), 404);
        assert_eq!(not_found.to_string(), "record not found: resource=Education, id=9");

        let misconfigured = AppError::from(DomainError::Configuration {
            entity: "Education",
            field: "level".into(),
        });
        assert_eq!(misconfigured.status_code(), 500);
    }
}
