use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::utils::validate::validate_char_field;

// 创建员工请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/staff.ts")]
pub struct CreateUserProfileRequest {
    pub name: String,
    #[serde(default)]
    pub role_ids: Vec<i64>,
}

impl CreateUserProfileRequest {
    pub fn validate(&self) -> Result<()> {
        validate_char_field("user_profile.name", &self.name, 32)
    }
}

// 创建角色请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/staff.ts")]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub menu_ids: Vec<i64>,
}

impl CreateRoleRequest {
    pub fn validate(&self) -> Result<()> {
        validate_char_field("role.name", &self.name, 32)
    }
}

// 创建菜单请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "crm/staff.ts")]
pub struct CreateMenuRequest {
    pub name: String,
    pub url_name: String,
}

impl CreateMenuRequest {
    pub fn validate(&self) -> Result<()> {
        validate_char_field("menu.name", &self.name, 32)?;
        validate_char_field("url_name", &self.url_name, 64)
    }
}

/// 管理员名称校验
pub fn validate_admin_name(name: &str) -> Result<()> {
    validate_char_field("admin.name", name, 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_request() {
        let req = CreateMenuRequest {
            name: "客户库".to_string(),
            url_name: "customer_list".to_string(),
        };
        assert!(req.validate().is_ok());

        // 任意路由写法均可，只限制长度
        let path = CreateMenuRequest {
            name: "客户库".to_string(),
            url_name: "/customers/".to_string(),
        };
        assert!(path.validate().is_ok());

        let too_long = CreateMenuRequest {
            name: "客户库".to_string(),
            url_name: "u".repeat(65),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_role_name_length() {
        let req = CreateRoleRequest {
            name: "r".repeat(33),
            menu_ids: vec![],
        };
        assert!(req.validate().is_err());
    }
}
