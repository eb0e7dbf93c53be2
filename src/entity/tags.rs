//! 标签实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// 多对多：标签 <-> 客户
impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        super::customer_tags::Relation::Customer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::customer_tags::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_tag(self) -> crate::models::customers::entities::Tag {
        crate::models::customers::entities::Tag {
            id: self.id,
            name: self.name,
        }
    }
}
