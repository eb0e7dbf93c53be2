use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::choices::{CustomerStatus, Intention, Source};

/// 客户信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/customer.ts")]
pub struct Customer {
    pub id: i64,
    pub name: Option<String>,
    pub qq: String,
    pub qq_name: String,
    pub phone: Option<String>,
    pub source: Source,
    pub referral_from: Option<String>, // 转介绍人QQ
    pub consult_course_id: i64,
    pub content: String,
    pub status: CustomerStatus,
    pub consultant_id: i64,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

// 客户以 QQ 号作为显示名称
impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.qq)
    }
}

/// 客户标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/customer.ts")]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// 客户跟进记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/customer.ts")]
pub struct CustomerFollowUp {
    pub id: i64,
    pub customer_id: i64,
    pub consultant_id: i64,
    pub content: String,
    pub intention: Intention,
    pub created_at: DateTime<Utc>,
}

impl CustomerFollowUp {
    /// `<客户QQ : 意向代码>`
    pub fn label(&self, customer_qq: &str) -> String {
        format!("<{customer_qq} : {}>", self.intention.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_up_label_uses_intention_code() {
        let follow_up = CustomerFollowUp {
            id: 1,
            customer_id: 1,
            consultant_id: 1,
            content: "咨询 Linux 课程".to_string(),
            intention: Intention::WithinTwoWeeks,
            created_at: Utc::now(),
        };
        assert_eq!(follow_up.label("12345"), "<12345 : 0>");
    }

    #[test]
    fn test_tag_display() {
        let tag = Tag {
            id: 1,
            name: "高意向".to_string(),
        };
        assert_eq!(tag.to_string(), "高意向");
    }
}
