use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::choices::{Attendance, Score};
use crate::utils::validate::validate_positive_small;

/// 缴费默认金额
pub const DEFAULT_PAYMENT_AMOUNT: i32 = 500;

// 创建报名请求
//
// (customer_id, class_list_id) 在数据库中联合唯一，同一学生不能重复报名同一班级
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/student.ts")]
pub struct CreateEnrollmentRequest {
    pub customer_id: i64,
    pub class_list_id: i64,
    pub consultant_id: i64,
    #[serde(default)]
    pub contract_agreed: bool,
    #[serde(default)]
    pub contract_approved: bool,
}

// 更新合同状态请求，None 表示不修改
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "crm/student.ts")]
pub struct UpdateEnrollmentContractRequest {
    pub contract_agreed: Option<bool>,
    pub contract_approved: Option<bool>,
}

// 创建学习记录请求，出勤默认“已签到”，成绩默认 N/A
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/student.ts")]
pub struct CreateStudyRecordRequest {
    pub enrollment_id: i64,
    pub course_record_id: i64,
    pub attendance: Option<Attendance>,
    pub score: Option<Score>,
    pub memo: Option<String>,
}

// 更新学习记录请求（批改 / 考勤）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "crm/student.ts")]
pub struct UpdateStudyRecordRequest {
    pub attendance: Option<Attendance>,
    pub score: Option<Score>,
    /// 传入空白字符串时清空备注
    pub memo: Option<String>,
}

// 创建缴费记录请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/student.ts")]
pub struct CreatePaymentRequest {
    pub customer_id: i64,
    pub course_id: i64,
    pub amount: Option<i32>,
    pub consultant_id: i64,
}

impl CreatePaymentRequest {
    pub fn amount(&self) -> i32 {
        self.amount.unwrap_or(DEFAULT_PAYMENT_AMOUNT)
    }

    pub fn validate(&self) -> Result<()> {
        validate_positive_small("amount", self.amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_amount_default() {
        let mut req = CreatePaymentRequest {
            customer_id: 1,
            course_id: 1,
            amount: None,
            consultant_id: 1,
        };
        assert_eq!(req.amount(), 500);
        assert!(req.validate().is_ok());
        req.amount = Some(-10);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_study_record_request_accepts_score_names() {
        let req: CreateStudyRecordRequest = serde_json::from_value(serde_json::json!({
            "enrollment_id": 1,
            "course_record_id": 2,
            "score": "b_plus"
        }))
        .expect("valid request");
        assert_eq!(req.score, Some(Score::BPlus));
        assert!(req.attendance.is_none());
    }
}
