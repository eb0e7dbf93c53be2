//! 校区实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "branches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub addr: String,
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
    pub fn into_branch(self) -> crate::models::classes::entities::Branch {
        crate::models::classes::entities::Branch {
            id: self.id,
            name: self.name,
            addr: self.addr,
        }
    }
}
