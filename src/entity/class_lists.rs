//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "class_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub branch_id: i64,
    pub course_id: i64,
    pub class_type: i16,
    pub semester: i32,
    pub start_date: i64,
    pub end_date: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::branches::Entity",
        from = "Column::BranchId",
        to = "super::branches::Column::Id"
    )]
    Branch,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::course_records::Entity")]
    CourseRecords,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
}

impl Related<super::branches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::course_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseRecords.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

// 多对多：班级 <-> 讲师
impl Related<super::user_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        super::class_list_teachers::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::class_list_teachers::Relation::ClassList.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class_list(
        self,
    ) -> crate::errors::Result<crate::models::classes::entities::ClassList> {
        use crate::models::choices::ClassType;
        use crate::models::classes::entities::ClassList;
        use chrono::{DateTime, Utc};

        Ok(ClassList {
            id: self.id,
            branch_id: self.branch_id,
            course_id: self.course_id,
            class_type: ClassType::try_from(self.class_type)?,
            semester: self.semester,
            start_date: DateTime::<Utc>::from_timestamp(self.start_date, 0).unwrap_or_default(),
            end_date: self
                .end_date
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
        })
    }
}
