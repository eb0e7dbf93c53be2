//! 班级讲师关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "class_list_teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub class_list_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_profile_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_lists::Entity",
        from = "Column::ClassListId",
        to = "super::class_lists::Column::Id"
    )]
    ClassList,
    #[sea_orm(
        belongs_to = "super::user_profiles::Entity",
        from = "Column::UserProfileId",
        to = "super::user_profiles::Column::Id"
    )]
    Teacher,
}

impl ActiveModelBehavior for ActiveModel {}
