use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::choices::{Attendance, Score};

/// 学生报名信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/student.ts")]
pub struct Enrollment {
    pub id: i64,
    pub customer_id: i64,
    pub class_list_id: i64,
    pub consultant_id: i64,
    pub contract_agreed: bool,   // 学员已同意条款
    pub contract_approved: bool, // 已审核
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    /// `客户QQ 班级`
    pub fn label(&self, customer_qq: &str, class_label: &str) -> String {
        format!("{customer_qq} {class_label}")
    }
}

/// 学习记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/student.ts")]
pub struct StudyRecord {
    pub id: i64,
    pub enrollment_id: i64,
    pub course_record_id: i64,
    pub attendance: Attendance,
    pub score: Score,
    pub memo: Option<String>,
    pub date: NaiveDate,
}

impl StudyRecord {
    /// `学生 上课记录 成绩代码`
    pub fn label(&self, enrollment_label: &str, course_record_label: &str) -> String {
        format!(
            "{enrollment_label} {course_record_label} {}",
            self.score.code()
        )
    }
}

/// 缴费记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/student.ts")]
pub struct Payment {
    pub id: i64,
    pub customer_id: i64,
    pub course_id: i64,
    pub amount: i32,
    pub consultant_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn label(&self, customer_qq: &str) -> String {
        format!("{customer_qq} {}", self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_record_label_uses_score_code() {
        let record = StudyRecord {
            id: 1,
            enrollment_id: 1,
            course_record_id: 1,
            attendance: Attendance::Late,
            score: Score::Copy,
            memo: None,
            date: Utc::now().date_naive(),
        };
        assert_eq!(
            record.label("12345 北京 Linux101 1", "北京 Linux101 1 2"),
            "12345 北京 Linux101 1 北京 Linux101 1 2 -100"
        );
    }

    #[test]
    fn test_payment_label() {
        let payment = Payment {
            id: 1,
            customer_id: 1,
            course_id: 1,
            amount: 500,
            consultant_id: 1,
            created_at: Utc::now(),
        };
        assert_eq!(payment.label("12345"), "12345 500");
    }
}
