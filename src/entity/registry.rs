//! 实体注册表
//!
//! 显式列出所有实体（含多对多关联表），编译期确定，不依赖运行时自动发现。

use sea_orm::{DatabaseConnection, DbErr, EntityName, EntityTrait, PaginatorTrait};

use crate::models::TableStat;

/// 已注册实体的描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub table: &'static str,
    pub verbose_name: &'static str,
}

macro_rules! register_entities {
    ($($module:ident => $verbose:literal),* $(,)?) => {
        /// 全部实体，模块名与表名一致
        pub const ENTITIES: &[EntityDescriptor] = &[
            $(EntityDescriptor { table: stringify!($module), verbose_name: $verbose },)*
        ];

        /// 实际的 SeaORM 表名，与 ENTITIES 顺序一致
        pub fn entity_table_names() -> Vec<String> {
            vec![$(super::$module::Entity.table_name().to_string(),)*]
        }

        /// 统计所有已注册表的行数
        pub async fn count_rows(db: &DatabaseConnection) -> Result<Vec<TableStat>, DbErr> {
            let mut stats = Vec::with_capacity(ENTITIES.len());
            $(
                stats.push(TableStat {
                    table: stringify!($module).to_string(),
                    verbose_name: $verbose.to_string(),
                    rows: super::$module::Entity::find().count(db).await?,
                });
            )*
            Ok(stats)
        }
    };
}

register_entities! {
    courses => "课程表",
    branches => "校区",
    tags => "标签表",
    menus => "左侧菜单",
    roles => "角色表",
    role_menus => "角色-菜单关联表",
    user_profiles => "员工账号表",
    user_profile_roles => "员工-角色关联表",
    admins => "管理员账号",
    customers => "客户信息表",
    customer_tags => "客户-标签关联表",
    customer_follow_ups => "客户跟进表",
    class_lists => "班级表",
    class_list_teachers => "班级-讲师关联表",
    enrollments => "学生报名信息表",
    course_records => "上课记录表",
    study_records => "学习记录表",
    payments => "缴费记录",
}

/// 按表名查找实体描述
pub fn find(table: &str) -> Option<&'static EntityDescriptor> {
    ENTITIES.iter().find(|e| e.table == table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_entity_table_names() {
        let declared: Vec<&str> = ENTITIES.iter().map(|e| e.table).collect();
        assert_eq!(declared, entity_table_names());
    }

    #[test]
    fn test_registry_covers_all_tables() {
        assert_eq!(ENTITIES.len(), 18);
        for join_table in [
            "customer_tags",
            "class_list_teachers",
            "user_profile_roles",
            "role_menus",
        ] {
            assert!(find(join_table).is_some(), "missing {join_table}");
        }
        assert_eq!(find("customers").map(|e| e.verbose_name), Some("客户信息表"));
        // 按表名精确匹配
        assert!(find("customer").is_none());
    }
}
