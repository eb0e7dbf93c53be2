use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// 非负小整数的取值上限
const POSITIVE_SMALL_MAX: i32 = 32767;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::Name)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::Price)
                            .integer()
                            .not_null()
                            .check(Expr::col(Courses::Price).between(0, POSITIVE_SMALL_MAX)),
                    )
                    .col(
                        ColumnDef::new(Courses::Period)
                            .integer()
                            .not_null()
                            .check(Expr::col(Courses::Period).between(0, POSITIVE_SMALL_MAX)),
                    )
                    .col(ColumnDef::new(Courses::Outline).text().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建校区表
        manager
            .create_table(
                Table::create()
                    .table(Branches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Branches::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Branches::Name)
                            .string_len(128)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Branches::Addr).string_len(128).not_null())
                    .to_owned(),
            )
            .await?;

        // 创建标签表
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tags::Name)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建菜单表
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Menus::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Menus::Name).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Menus::UrlName)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建角色表
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Roles::Name)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 角色-菜单关联表
        manager
            .create_table(
                Table::create()
                    .table(RoleMenus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RoleMenus::RoleId).big_integer().not_null())
                    .col(ColumnDef::new(RoleMenus::MenuId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(RoleMenus::RoleId)
                            .col(RoleMenus::MenuId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoleMenus::Table, RoleMenus::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoleMenus::Table, RoleMenus::MenuId)
                            .to(Menus::Table, Menus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建员工账号表
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfiles::Name).string_len(32).not_null())
                    .to_owned(),
            )
            .await?;

        // 员工-角色关联表
        manager
            .create_table(
                Table::create()
                    .table(UserProfileRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfileRoles::UserProfileId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserProfileRoles::RoleId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserProfileRoles::UserProfileId)
                            .col(UserProfileRoles::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserProfileRoles::Table, UserProfileRoles::UserProfileId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserProfileRoles::Table, UserProfileRoles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建管理员账号表
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admins::Name).string_len(32).not_null())
                    .to_owned(),
            )
            .await?;

        // 关联表反向查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_role_menus_menu_id")
                    .table(RoleMenus::Table)
                    .col(RoleMenus::MenuId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_profile_roles_role_id")
                    .table(UserProfileRoles::Table)
                    .col(UserProfileRoles::RoleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserProfileRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RoleMenus::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Menus::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Branches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Name,
    Price,
    Period,
    Outline,
}

#[derive(DeriveIden)]
enum Branches {
    #[sea_orm(iden = "branches")]
    Table,
    Id,
    Name,
    Addr,
}

#[derive(DeriveIden)]
enum Tags {
    #[sea_orm(iden = "tags")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Menus {
    #[sea_orm(iden = "menus")]
    Table,
    Id,
    Name,
    UrlName,
}

#[derive(DeriveIden)]
enum Roles {
    #[sea_orm(iden = "roles")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum RoleMenus {
    #[sea_orm(iden = "role_menus")]
    Table,
    RoleId,
    MenuId,
}

#[derive(DeriveIden)]
enum UserProfiles {
    #[sea_orm(iden = "user_profiles")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum UserProfileRoles {
    #[sea_orm(iden = "user_profile_roles")]
    Table,
    UserProfileId,
    RoleId,
}

#[derive(DeriveIden)]
enum Admins {
    #[sea_orm(iden = "admins")]
    Table,
    Id,
    Name,
}
