use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 员工账号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/staff.ts")]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
}

/// 管理员账号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/staff.ts")]
pub struct Admin {
    pub id: i64,
    pub name: String,
}

/// 角色，对菜单进行权限分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/staff.ts")]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// 左侧菜单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "crm/staff.ts")]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub url_name: String,
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.name)
                }
            }
        )*
    };
}

display_by_name!(UserProfile, Admin, Role, Menu);
