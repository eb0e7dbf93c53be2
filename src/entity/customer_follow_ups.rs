//! 客户跟进实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer_follow_ups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub customer_id: i64,
    pub consultant_id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub intention: i16,
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
        belongs_to = "super::user_profiles::Entity",
        from = "Column::ConsultantId",
        to = "super::user_profiles::Column::Id"
    )]
    Consultant,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::user_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Consultant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_follow_up(
        self,
    ) -> crate::errors::Result<crate::models::customers::entities::CustomerFollowUp> {
        use crate::models::choices::Intention;
        use crate::models::customers::entities::CustomerFollowUp;
        use chrono::{DateTime, Utc};

        Ok(CustomerFollowUp {
            id: self.id,
            customer_id: self.customer_id,
            consultant_id: self.consultant_id,
            content: self.content,
            intention: Intention::try_from(self.intention)?,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        })
    }
}
