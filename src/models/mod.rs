//! 业务模型
//!
//! 与 entity 模块中的数据库实体分离：枚举字段为强类型，时间为 chrono 类型。

pub mod choices;
pub mod classes;
pub mod common;
pub mod customers;
pub mod staff;
pub mod students;

pub use common::{PaginationInfo, TableStat};
