//! Training CRM - 培训机构客户关系管理数据层
//!
//! 管理咨询客户、跟进记录、课程与班级、报名、学习记录、缴费以及员工权限。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体与实体注册表
//! - `errors`: 统一错误处理
//! - `models`: 业务模型、枚举选项与请求结构
//! - `runtime`: 运行时生命周期管理
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod storage;
pub mod utils;
