use super::entities::Customer;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 客户列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "crm/customer.ts")]
pub struct CustomerListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Customer>,
}
