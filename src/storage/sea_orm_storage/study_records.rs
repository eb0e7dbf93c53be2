use super::{SeaOrmStorage, db_err};
use crate::entity::study_records::{ActiveModel, Column, Entity as StudyRecords};
use crate::errors::Result;
use crate::models::students::{
    entities::StudyRecord,
    requests::{CreateStudyRecordRequest, UpdateStudyRecordRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学习记录，出勤与成绩未填写时取默认值
    pub async fn create_study_record_impl(
        &self,
        req: CreateStudyRecordRequest,
    ) -> Result<StudyRecord> {
        let model = ActiveModel {
            enrollment_id: Set(req.enrollment_id),
            course_record_id: Set(req.course_record_id),
            attendance: Set(req.attendance.unwrap_or_default().code()),
            score: Set(req.score.unwrap_or_default().code()),
            memo: Set(req.memo),
            date: Set(chrono::Utc::now().date_naive()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("创建学习记录失败"))?;

        result.into_study_record()
    }

    /// 批改成绩或修改考勤
    pub async fn update_study_record_impl(
        &self,
        id: i64,
        update: UpdateStudyRecordRequest,
    ) -> Result<Option<StudyRecord>> {
        let Some(existing) = self.get_study_record_by_id(id).await? else {
            return Ok(None);
        };

        if update.attendance.is_none() && update.score.is_none() && update.memo.is_none() {
            return Ok(Some(existing));
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(attendance) = update.attendance {
            model.attendance = Set(attendance.code());
        }

        if let Some(score) = update.score {
            model.score = Set(score.code());
        }

        if let Some(memo) = update.memo {
            model.memo = Set((!memo.trim().is_empty()).then_some(memo));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(db_err("更新学习记录失败"))?;

        result.into_study_record().map(Some)
    }

    /// 列出报名记录下的学习记录
    pub async fn list_study_records_impl(&self, enrollment_id: i64) -> Result<Vec<StudyRecord>> {
        let records = StudyRecords::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询学习记录失败"))?;

        records.into_iter().map(|m| m.into_study_record()).collect()
    }

    pub(crate) async fn get_study_record_by_id(&self, id: i64) -> Result<Option<StudyRecord>> {
        let result = StudyRecords::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学习记录失败"))?;

        result.map(|m| m.into_study_record()).transpose()
    }
}
