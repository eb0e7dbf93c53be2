//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub price: i32,
    pub period: i32,
    #[sea_orm(column_type = "Text")]
    pub outline: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_lists::Entity")]
    ClassLists,
}

impl Related<super::class_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassLists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::classes::entities::Course {
        crate::models::classes::entities::Course {
            id: self.id,
            name: self.name,
            price: self.price,
            period: self.period,
            outline: self.outline,
        }
    }
}
