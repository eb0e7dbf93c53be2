use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::choices::ClassType;
use crate::utils::validate::{
    validate_char_field, validate_optional_char_field, validate_positive_small, validate_required,
};

// 创建课程请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/class.ts")]
pub struct CreateCourseRequest {
    pub name: String,
    pub price: i32,
    pub period: i32,
    pub outline: String,
}

impl CreateCourseRequest {
    pub fn validate(&self) -> Result<()> {
        validate_char_field("course.name", &self.name, 64)?;
        validate_positive_small("price", self.price)?;
        validate_positive_small("period", self.period)?;
        validate_required("outline", &self.outline)
    }
}

// 创建校区请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/class.ts")]
pub struct CreateBranchRequest {
    pub name: String,
    pub addr: String,
}

impl CreateBranchRequest {
    pub fn validate(&self) -> Result<()> {
        validate_char_field("branch.name", &self.name, 128)?;
        validate_char_field("addr", &self.addr, 128)
    }
}

// 创建班级请求
//
// (branch_id, course_id, semester) 在数据库中联合唯一
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/class.ts")]
pub struct CreateClassListRequest {
    pub branch_id: i64,
    pub course_id: i64,
    pub class_type: ClassType,
    pub semester: i32,
    #[serde(default)]
    pub teacher_ids: Vec<i64>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl CreateClassListRequest {
    pub fn validate(&self) -> Result<()> {
        validate_positive_small("semester", self.semester)
    }
}

// 创建上课记录请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/class.ts")]
pub struct CreateCourseRecordRequest {
    pub class_list_id: i64,
    pub day_num: i32,
    pub teacher_id: i64,
    pub has_homework: Option<bool>, // 默认有作业
    pub homework_title: Option<String>,
    pub homework_content: String,
    pub outline: String,
}

impl CreateCourseRecordRequest {
    pub fn validate(&self) -> Result<()> {
        validate_positive_small("day_num", self.day_num)?;
        validate_optional_char_field("homework_title", self.homework_title.as_deref(), 128)?;
        validate_required("homework_content", &self.homework_content)?;
        validate_required("outline", &self.outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_course_request_range() {
        let mut req = CreateCourseRequest {
            name: "Linux101".to_string(),
            price: 8000,
            period: 5,
            outline: "基础入门".to_string(),
        };
        assert!(req.validate().is_ok());
        req.price = 40000;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_class_list_request_semester_range() {
        let start = Utc::now();
        let mut req = CreateClassListRequest {
            branch_id: 1,
            course_id: 1,
            class_type: ClassType::InPersonWeekend,
            semester: 1,
            teacher_ids: vec![],
            start_date: start,
            end_date: Some(start - Duration::days(1)),
        };
        assert!(req.validate().is_ok());
        req.semester = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_course_record_request_requires_homework_content() {
        let mut req = CreateCourseRecordRequest {
            class_list_id: 1,
            day_num: 1,
            teacher_id: 1,
            has_homework: Some(false),
            homework_title: None,
            homework_content: String::new(),
            outline: "第一天".to_string(),
        };
        assert!(req.validate().is_err());
        req.homework_content = "无".to_string();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_course_record_request_title_length() {
        let req = CreateCourseRecordRequest {
            class_list_id: 1,
            day_num: 1,
            teacher_id: 1,
            has_homework: None,
            homework_title: Some("x".repeat(129)),
            homework_content: "练习".to_string(),
            outline: "第一天".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
