//! 管理端用例
pub mod education;
