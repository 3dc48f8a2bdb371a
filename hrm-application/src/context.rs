use bon::Builder;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息，仅用于日志关联与审计：
/// - 关联追踪 `correlation_id`；
/// - 执行者 `actor_id`（当前登录用户的员工编号）。
///
/// 典型用法：
/// ```rust
/// use hrm_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".into())
///     .actor_id(1)
///     .build();
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct AppContext {
    correlation_id: Option<String>,
    actor_id: Option<i64>,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn actor_id(&self) -> Option<i64> {
        self.actor_id
    }
}
