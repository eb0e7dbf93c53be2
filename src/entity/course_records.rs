//! 上课记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_list_id: i64,
    pub day_num: i32,
    pub teacher_id: i64,
    pub has_homework: bool,
    pub homework_title: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub homework_content: String,
    #[sea_orm(column_type = "Text")]
    pub outline: String,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_lists::Entity",
        from = "Column::ClassListId",
        to = "super::class_lists::Column::Id"
    )]
    ClassList,
    #[sea_orm(
        belongs_to = "super::user_profiles::Entity",
        from = "Column::TeacherId",
        to = "super::user_profiles::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::study_records::Entity")]
    StudyRecords,
}

impl Related<super::class_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassList.def()
    }
}

impl Related<super::user_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::study_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course_record(self) -> crate::models::classes::entities::CourseRecord {
        crate::models::classes::entities::CourseRecord {
            id: self.id,
            class_list_id: self.class_list_id,
            day_num: self.day_num,
            teacher_id: self.teacher_id,
            has_homework: self.has_homework,
            homework_title: self.homework_title,
            homework_content: self.homework_content,
            outline: self.outline,
            date: self.date,
        }
    }
}
