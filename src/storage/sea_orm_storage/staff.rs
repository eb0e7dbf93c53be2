use std::collections::BTreeSet;

use super::{SeaOrmStorage, db_err};
use crate::entity::admins::{ActiveModel as AdminActiveModel, Entity as Admins};
use crate::entity::menus::{ActiveModel as MenuActiveModel, Column as MenuColumn, Entity as Menus};
use crate::entity::role_menus::{
    ActiveModel as RoleMenuActiveModel, Column as RoleMenuColumn, Entity as RoleMenus,
};
use crate::entity::roles::{ActiveModel as RoleActiveModel, Column as RoleColumn, Entity as Roles};
use crate::entity::user_profile_roles::{
    ActiveModel as UserProfileRoleActiveModel, Column as UserProfileRoleColumn,
    Entity as UserProfileRoles,
};
use crate::entity::user_profiles::{ActiveModel as UserProfileActiveModel, Entity as UserProfiles};
use crate::errors::{CrmError, Result};
use crate::models::staff::{
    entities::{Admin, Menu, Role, UserProfile},
    requests::{CreateMenuRequest, CreateRoleRequest, CreateUserProfileRequest, validate_admin_name},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建员工，并在同一事务中分配角色
    pub async fn create_user_profile_impl(
        &self,
        req: CreateUserProfileRequest,
    ) -> Result<UserProfile> {
        req.validate()?;

        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let model = UserProfileActiveModel {
            name: Set(req.name),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(db_err("创建员工失败"))?;

        let mut role_ids = req.role_ids;
        role_ids.sort_unstable();
        role_ids.dedup();
        for role_id in role_ids {
            UserProfileRoleActiveModel {
                user_profile_id: Set(result.id),
                role_id: Set(role_id),
            }
            .insert(&txn)
            .await
            .map_err(db_err("分配角色失败"))?;
        }

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(result.into_user_profile())
    }

    /// 为员工分配角色，已分配时返回 false
    pub async fn assign_role_impl(&self, user_profile_id: i64, role_id: i64) -> Result<bool> {
        let existing = UserProfileRoles::find_by_id((user_profile_id, role_id))
            .one(&self.db)
            .await
            .map_err(db_err("查询员工角色失败"))?;
        if existing.is_some() {
            return Ok(false);
        }

        UserProfileRoleActiveModel {
            user_profile_id: Set(user_profile_id),
            role_id: Set(role_id),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("分配角色失败"))?;

        Ok(true)
    }

    /// 列出员工的角色
    pub async fn list_user_roles_impl(&self, user_profile_id: i64) -> Result<Vec<Role>> {
        let user = UserProfiles::find_by_id(user_profile_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询员工失败"))?
            .ok_or_else(|| CrmError::not_found(format!("员工不存在: {user_profile_id}")))?;

        let roles = user
            .find_related(Roles)
            .order_by_asc(RoleColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询员工角色失败"))?;

        Ok(roles.into_iter().map(|m| m.into_role()).collect())
    }

    /// 员工通过所有角色可见的菜单，按 ID 去重
    pub async fn list_user_menus_impl(&self, user_profile_id: i64) -> Result<Vec<Menu>> {
        if UserProfiles::find_by_id(user_profile_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询员工失败"))?
            .is_none()
        {
            return Err(CrmError::not_found(format!("员工不存在: {user_profile_id}")));
        }

        let role_ids: Vec<i64> = UserProfileRoles::find()
            .filter(UserProfileRoleColumn::UserProfileId.eq(user_profile_id))
            .all(&self.db)
            .await
            .map_err(db_err("查询员工角色失败"))?
            .into_iter()
            .map(|m| m.role_id)
            .collect();

        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let menu_ids: BTreeSet<i64> = RoleMenus::find()
            .filter(RoleMenuColumn::RoleId.is_in(role_ids))
            .all(&self.db)
            .await
            .map_err(db_err("查询角色菜单失败"))?
            .into_iter()
            .map(|m| m.menu_id)
            .collect();

        if menu_ids.is_empty() {
            return Ok(Vec::new());
        }

        let menus = Menus::find()
            .filter(MenuColumn::Id.is_in(menu_ids))
            .order_by_asc(MenuColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询菜单失败"))?;

        Ok(menus.into_iter().map(|m| m.into_menu()).collect())
    }

    /// 创建管理员账号
    pub async fn create_admin_impl(&self, name: &str) -> Result<Admin> {
        validate_admin_name(name)?;

        let model = AdminActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("创建管理员失败"))?;

        Ok(result.into_admin())
    }

    pub async fn count_admins_impl(&self) -> Result<u64> {
        Admins::find()
            .count(&self.db)
            .await
            .map_err(db_err("统计管理员失败"))
    }

    /// 创建角色，并在同一事务中授权菜单
    pub async fn create_role_impl(&self, req: CreateRoleRequest) -> Result<Role> {
        req.validate()?;

        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let model = RoleActiveModel {
            name: Set(req.name),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(db_err("创建角色失败"))?;

        let mut menu_ids = req.menu_ids;
        menu_ids.sort_unstable();
        menu_ids.dedup();
        for menu_id in menu_ids {
            RoleMenuActiveModel {
                role_id: Set(result.id),
                menu_id: Set(menu_id),
            }
            .insert(&txn)
            .await
            .map_err(db_err("授权菜单失败"))?;
        }

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(result.into_role())
    }

    /// 为角色授权菜单，已授权时返回 false
    pub async fn grant_menu_impl(&self, role_id: i64, menu_id: i64) -> Result<bool> {
        let existing = RoleMenus::find_by_id((role_id, menu_id))
            .one(&self.db)
            .await
            .map_err(db_err("查询角色菜单失败"))?;
        if existing.is_some() {
            return Ok(false);
        }

        RoleMenuActiveModel {
            role_id: Set(role_id),
            menu_id: Set(menu_id),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("授权菜单失败"))?;

        Ok(true)
    }

    /// 列出角色的菜单
    pub async fn list_role_menus_impl(&self, role_id: i64) -> Result<Vec<Menu>> {
        let role = Roles::find_by_id(role_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询角色失败"))?
            .ok_or_else(|| CrmError::not_found(format!("角色不存在: {role_id}")))?;

        let menus = role
            .find_related(Menus)
            .order_by_asc(MenuColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询角色菜单失败"))?;

        Ok(menus.into_iter().map(|m| m.into_menu()).collect())
    }

    /// 创建菜单
    pub async fn create_menu_impl(&self, req: CreateMenuRequest) -> Result<Menu> {
        req.validate()?;

        let model = MenuActiveModel {
            name: Set(req.name),
            url_name: Set(req.url_name),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建菜单失败"))?;

        Ok(result.into_menu())
    }
}
