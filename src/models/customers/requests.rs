use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::choices::{CustomerStatus, Intention, Source};
use crate::utils::validate::{
    validate_char_field, validate_optional_char_field, validate_required,
};

// 创建客户请求
//
// status 不填写时为“未报名”；tag_ids 为创建后立即关联的标签
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/customer.ts")]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub qq: String,
    pub qq_name: String,
    pub phone: Option<String>,
    pub source: Source,
    pub referral_from: Option<String>,
    pub consult_course_id: i64,
    pub content: String,
    pub status: Option<CustomerStatus>,
    pub consultant_id: i64,
    pub memo: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

impl CreateCustomerRequest {
    pub fn validate(&self) -> Result<()> {
        validate_optional_char_field("name", self.name.as_deref(), 32)?;
        validate_char_field("qq", &self.qq, 64)?;
        validate_char_field("qq_name", &self.qq_name, 32)?;
        validate_optional_char_field("phone", self.phone.as_deref(), 64)?;
        validate_optional_char_field("referral_from", self.referral_from.as_deref(), 64)?;
        validate_required("content", &self.content)?;
        Ok(())
    }
}

// 客户列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "crm/customer.ts")]
pub struct CustomerListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<CustomerStatus>,
    pub source: Option<Source>,
    pub consultant_id: Option<i64>,
    pub search: Option<String>, // 匹配 qq / qq_name / name
}

// 创建跟进记录请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/customer.ts")]
pub struct CreateFollowUpRequest {
    pub customer_id: i64,
    pub consultant_id: i64,
    pub content: String,
    pub intention: Intention,
}

impl CreateFollowUpRequest {
    pub fn validate(&self) -> Result<()> {
        validate_required("content", &self.content)
    }
}

/// 标签名校验
pub fn validate_tag_name(name: &str) -> Result<()> {
    validate_char_field("tag.name", name, 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateCustomerRequest {
        CreateCustomerRequest {
            name: None,
            qq: "12345".to_string(),
            qq_name: "小王".to_string(),
            phone: None,
            source: Source::QqGroup,
            referral_from: None,
            consult_course_id: 1,
            content: "想了解 Linux 课程".to_string(),
            status: None,
            consultant_id: 1,
            memo: None,
            tag_ids: vec![],
        }
    }

    #[test]
    fn test_valid_customer_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_customer_request_rejects_blank_qq() {
        let mut req = request();
        req.qq = " ".to_string();
        assert_eq!(req.validate().unwrap_err().code(), "E006");
    }

    #[test]
    fn test_customer_request_rejects_long_qq() {
        let mut req = request();
        req.qq = "9".repeat(65);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_choice_names() {
        let req: CreateCustomerRequest = serde_json::from_value(serde_json::json!({
            "qq": "12345",
            "qq_name": "小王",
            "source": "referral",
            "referral_from": "67890",
            "consult_course_id": 1,
            "content": "咨询",
            "consultant_id": 2
        }))
        .expect("valid request");
        assert_eq!(req.source, Source::Referral);
        assert!(req.status.is_none());
        assert!(req.tag_ids.is_empty());
    }
}
