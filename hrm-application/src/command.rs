/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，通常会修改领域状态。
/// - 只返回最小执行结果（如新建记录的标识），不返回投影后的业务数据；
/// - 命令在构造时完成请求参数校验，处理器只面对合法输入；
/// - 建议保持语义化的“动宾结构”命名，如 `SaveEducation`、`DeleteEducations`。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 执行结果
    type Output: Send + 'static;
}
