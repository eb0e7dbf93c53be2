use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 默认页码与分页大小
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
/// 页码上限，保证 (page - 1) * page_size 不溢出
pub const MAX_PAGE: i64 = i64::MAX / MAX_PAGE_SIZE;

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// 规范化分页参数：页码限制在 1..=MAX_PAGE，分页大小限制在 1..=100
pub fn normalize_page(page: Option<i64>, size: Option<i64>) -> (u64, u64) {
    let page = page.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE) as u64;
    let size = size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE) as u64;
    (page, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_page() {
        assert_eq!(normalize_page(None, None), (1, 10));
        assert_eq!(normalize_page(Some(0), Some(0)), (1, 1));
        assert_eq!(normalize_page(Some(3), Some(500)), (3, 100));
    }

    #[test]
    fn test_normalize_page_caps_huge_page() {
        let (page, size) = normalize_page(Some(i64::MAX), Some(MAX_PAGE_SIZE));
        assert_eq!(page, MAX_PAGE as u64);
        assert!((page - 1).checked_mul(size).is_some());
    }
}
