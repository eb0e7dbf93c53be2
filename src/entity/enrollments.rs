//! 学生报名实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub customer_id: i64,
    pub class_list_id: i64,
    pub consultant_id: i64,
    pub contract_agreed: bool,
    pub contract_approved: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::class_lists::Entity",
        from = "Column::ClassListId",
        to = "super::class_lists::Column::Id"
    )]
    ClassList,
    #[sea_orm(
        belongs_to = "super::user_profiles::Entity",
        from = "Column::ConsultantId",
        to = "super::user_profiles::Column::Id"
    )]
    Consultant,
    #[sea_orm(has_many = "super::study_records::Entity")]
    StudyRecords,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::class_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassList.def()
    }
}

impl Related<super::user_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Consultant.def()
    }
}

impl Related<super::study_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_enrollment(self) -> crate::models::students::entities::Enrollment {
        use crate::models::students::entities::Enrollment;
        use chrono::{DateTime, Utc};

        Enrollment {
            id: self.id,
            customer_id: self.customer_id,
            class_list_id: self.class_list_id,
            consultant_id: self.consultant_id,
            contract_agreed: self.contract_agreed,
            contract_approved: self.contract_approved,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
