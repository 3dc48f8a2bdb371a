//! 应用层（Application Layer）
//!
//! 以命令/查询处理器组织用例，处理器只返回经模型投影后的 DTO：
//! - [`query`] / [`query_handler`]：只读查询及其处理器；
//! - [`command`] / [`command_handler`]：写操作命令及其处理器；
//! - [`endpoint_result`]：单资源与集合的统一响应载体；
//! - [`admin`]：管理端具体用例（如学历维护）。
//!
pub mod admin;
pub mod command;
pub mod command_handler;
pub mod context;
pub mod dto;
pub mod endpoint_result;
pub mod error;
pub mod query;
pub mod query_handler;

pub use context::AppContext;
pub use endpoint_result::{EndpointCollectionResult, EndpointResourceResult};
pub use error::AppError;
