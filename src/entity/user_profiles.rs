//! 员工账号实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// 多对多：员工 <-> 角色
impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_profile_roles::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_profile_roles::Relation::UserProfile.def().rev())
    }
}

// 多对多：讲师 <-> 所教班级
impl Related<super::class_lists::Entity> for Entity {
    fn to() -> RelationDef {
        super::class_list_teachers::Relation::ClassList.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::class_list_teachers::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_user_profile(self) -> crate::models::staff::entities::UserProfile {
        crate::models::staff::entities::UserProfile {
            id: self.id,
            name: self.name,
        }
    }
}
