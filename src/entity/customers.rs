//! 客户信息实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    #[sea_orm(unique)]
    pub qq: String,
    pub qq_name: String,
    pub phone: Option<String>,
    pub source: i16,
    pub referral_from: Option<String>,
    pub consult_course_id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub status: i16,
    pub consultant_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub memo: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::ConsultCourseId",
        to = "super::courses::Column::Id"
    )]
    ConsultCourse,
    #[sea_orm(
        belongs_to = "super::user_profiles::Entity",
        from = "Column::ConsultantId",
        to = "super::user_profiles::Column::Id"
    )]
    Consultant,
    #[sea_orm(has_many = "super::customer_follow_ups::Entity")]
    FollowUps,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsultCourse.def()
    }
}

impl Related<super::user_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Consultant.def()
    }
}

impl Related<super::customer_follow_ups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FollowUps.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

// 多对多：客户 <-> 标签
impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::customer_tags::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::customer_tags::Relation::Customer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_customer(
        self,
    ) -> crate::errors::Result<crate::models::customers::entities::Customer> {
        use crate::models::choices::{CustomerStatus, Source};
        use crate::models::customers::entities::Customer;
        use chrono::{DateTime, Utc};

        Ok(Customer {
            id: self.id,
            name: self.name,
            qq: self.qq,
            qq_name: self.qq_name,
            phone: self.phone,
            source: Source::try_from(self.source)?,
            referral_from: self.referral_from,
            consult_course_id: self.consult_course_id,
            content: self.content,
            status: CustomerStatus::try_from(self.status)?,
            consultant_id: self.consultant_id,
            memo: self.memo,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CrmError;
    use crate::models::choices::{CustomerStatus, Source};

    fn model(source: i16, status: i16) -> Model {
        Model {
            id: 1,
            name: None,
            qq: "12345".to_string(),
            qq_name: "小王".to_string(),
            phone: None,
            source,
            referral_from: None,
            consult_course_id: 1,
            content: "咨询".to_string(),
            status,
            consultant_id: 1,
            memo: None,
            created_at: 0,
        }
    }

    #[test]
    fn test_into_customer() {
        let customer = model(1, 1).into_customer().unwrap();
        assert_eq!(customer.source, Source::QqGroup);
        assert_eq!(customer.status, CustomerStatus::NotEnrolled);
        assert_eq!(customer.to_string(), "12345");
    }

    #[test]
    fn test_into_customer_rejects_unknown_code() {
        let err = model(99, 1).into_customer().unwrap_err();
        assert!(matches!(err, CrmError::InvalidChoice(_)), "got {err:?}");
        assert_eq!(err.code(), "E007");
        assert!(model(1, 9).into_customer().is_err());
    }
}
