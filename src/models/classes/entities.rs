use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::choices::ClassType;

/// 课程
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/class.ts")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub period: i32, // 周期(月)
    pub outline: String,
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// 校区
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/class.ts")]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub addr: String,
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// 班级
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/class.ts")]
pub struct ClassList {
    pub id: i64,
    pub branch_id: i64,
    pub course_id: i64,
    pub class_type: ClassType,
    pub semester: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl ClassList {
    /// `校区 课程 学期`
    pub fn label(&self, branch_name: &str, course_name: &str) -> String {
        format!("{branch_name} {course_name} {}", self.semester)
    }
}

/// 上课记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/class.ts")]
pub struct CourseRecord {
    pub id: i64,
    pub class_list_id: i64,
    pub day_num: i32, // 第几节(天)
    pub teacher_id: i64,
    pub has_homework: bool,
    pub homework_title: Option<String>,
    pub homework_content: String,
    pub outline: String,
    pub date: NaiveDate,
}

impl CourseRecord {
    /// `班级 第几节`
    pub fn label(&self, class_label: &str) -> String {
        format!("{class_label} {}", self.day_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_and_course_record_labels() {
        let class = ClassList {
            id: 1,
            branch_id: 1,
            course_id: 1,
            class_type: ClassType::Online,
            semester: 3,
            start_date: Utc::now(),
            end_date: None,
        };
        let class_label = class.label("北京", "Linux101");
        assert_eq!(class_label, "北京 Linux101 3");

        let record = CourseRecord {
            id: 1,
            class_list_id: 1,
            day_num: 12,
            teacher_id: 1,
            has_homework: true,
            homework_title: None,
            homework_content: String::new(),
            outline: String::new(),
            date: Utc::now().date_naive(),
        };
        assert_eq!(record.label(&class_label), "北京 Linux101 3 12");
    }
}
