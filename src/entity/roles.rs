//! 角色实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// 多对多：角色 <-> 菜单
impl Related<super::menus::Entity> for Entity {
    fn to() -> RelationDef {
        super::role_menus::Relation::Menu.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::role_menus::Relation::Role.def().rev())
    }
}

// 多对多：角色 <-> 员工
impl Related<super::user_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_profile_roles::Relation::UserProfile.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_profile_roles::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_role(self) -> crate::models::staff::entities::Role {
        crate::models::staff::entities::Role {
            id: self.id,
            name: self.name,
        }
    }
}
