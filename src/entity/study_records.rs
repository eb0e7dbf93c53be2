//! 学习记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "study_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub enrollment_id: i64,
    pub course_record_id: i64,
    pub attendance: i16,
    pub score: i16,
    #[sea_orm(column_type = "Text", nullable)]
    pub memo: Option<String>,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enrollments::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollments::Column::Id"
    )]
    Enrollment,
    #[sea_orm(
        belongs_to = "super::course_records::Entity",
        from = "Column::CourseRecordId",
        to = "super::course_records::Column::Id"
    )]
    CourseRecord,
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::course_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_study_record(
        self,
    ) -> crate::errors::Result<crate::models::students::entities::StudyRecord> {
        use crate::models::choices::{Attendance, Score};
        use crate::models::students::entities::StudyRecord;

        Ok(StudyRecord {
            id: self.id,
            enrollment_id: self.enrollment_id,
            course_record_id: self.course_record_id,
            attendance: Attendance::try_from(self.attendance)?,
            score: Score::try_from(self.score)?,
            memo: self.memo,
            date: self.date,
        })
    }
}
