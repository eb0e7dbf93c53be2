//! 菜单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub url_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// 多对多：菜单 <-> 角色
impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        super::role_menus::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::role_menus::Relation::Menu.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_menu(self) -> crate::models::staff::entities::Menu {
        crate::models::staff::entities::Menu {
            id: self.id,
            name: self.name,
            url_name: self.url_name,
        }
    }
}
