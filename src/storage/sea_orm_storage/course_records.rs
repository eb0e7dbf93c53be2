use super::{SeaOrmStorage, db_err};
use crate::entity::course_records::{ActiveModel, Column, Entity as CourseRecords};
use crate::errors::Result;
use crate::models::classes::{entities::CourseRecord, requests::CreateCourseRecordRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建上课记录，上课日期为当天
    pub async fn create_course_record_impl(
        &self,
        req: CreateCourseRecordRequest,
    ) -> Result<CourseRecord> {
        req.validate()?;

        let model = ActiveModel {
            class_list_id: Set(req.class_list_id),
            day_num: Set(req.day_num),
            teacher_id: Set(req.teacher_id),
            has_homework: Set(req.has_homework.unwrap_or(true)),
            homework_title: Set(req.homework_title),
            homework_content: Set(req.homework_content),
            outline: Set(req.outline),
            date: Set(chrono::Utc::now().date_naive()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("创建上课记录失败"))?;

        Ok(result.into_course_record())
    }

    /// 按节次列出班级的上课记录
    pub async fn list_course_records_impl(&self, class_list_id: i64) -> Result<Vec<CourseRecord>> {
        let records = CourseRecords::find()
            .filter(Column::ClassListId.eq(class_list_id))
            .order_by_asc(Column::DayNum)
            .all(&self.db)
            .await
            .map_err(db_err("查询上课记录失败"))?;

        Ok(records.into_iter().map(|m| m.into_course_record()).collect())
    }

    pub(crate) async fn get_course_record_by_id(&self, id: i64) -> Result<Option<CourseRecord>> {
        let result = CourseRecords::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询上课记录失败"))?;

        Ok(result.map(|m| m.into_course_record()))
    }
}
