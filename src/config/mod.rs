//! 配置管理
//!
//! 默认值 → config.toml → config.{APP_ENV}.toml → CRM_* 环境变量，逐层覆盖。

mod r#impl;
mod structs;

pub use structs::*;
