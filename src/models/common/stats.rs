use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 单张表的行数统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/stats.ts")]
pub struct TableStat {
    pub table: String,
    pub verbose_name: String,
    pub rows: u64,
}
