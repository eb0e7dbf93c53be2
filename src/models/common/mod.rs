pub mod pagination;
pub mod stats;

pub use pagination::PaginationInfo;
pub use stats::TableStat;
