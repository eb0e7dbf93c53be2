use super::{SeaOrmStorage, db_err};
use crate::entity::customer_tags::{ActiveModel as CustomerTagActiveModel, Entity as CustomerTags};
use crate::entity::customers::Entity as Customers;
use crate::entity::tags::{ActiveModel, Column, Entity as Tags};
use crate::errors::{CrmError, Result};
use crate::models::customers::{entities::Tag, requests::validate_tag_name};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建标签
    pub async fn create_tag_impl(&self, name: &str) -> Result<Tag> {
        validate_tag_name(name)?;

        let model = ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建标签失败"))?;

        Ok(result.into_tag())
    }

    /// 列出全部标签
    pub async fn list_tags_impl(&self) -> Result<Vec<Tag>> {
        let tags = Tags::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询标签列表失败"))?;

        Ok(tags.into_iter().map(|m| m.into_tag()).collect())
    }

    /// 为客户添加标签，关联已存在时返回 false
    pub async fn add_customer_tag_impl(&self, customer_id: i64, tag_id: i64) -> Result<bool> {
        let existing = CustomerTags::find_by_id((customer_id, tag_id))
            .one(&self.db)
            .await
            .map_err(db_err("查询客户标签失败"))?;
        if existing.is_some() {
            return Ok(false);
        }

        CustomerTagActiveModel {
            customer_id: Set(customer_id),
            tag_id: Set(tag_id),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("关联客户标签失败"))?;

        Ok(true)
    }

    /// 移除客户标签
    pub async fn remove_customer_tag_impl(&self, customer_id: i64, tag_id: i64) -> Result<bool> {
        let result = CustomerTags::delete_by_id((customer_id, tag_id))
            .exec(&self.db)
            .await
            .map_err(db_err("移除客户标签失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出客户的标签
    pub async fn list_customer_tags_impl(&self, customer_id: i64) -> Result<Vec<Tag>> {
        let customer = Customers::find_by_id(customer_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询客户失败"))?
            .ok_or_else(|| CrmError::not_found(format!("客户不存在: {customer_id}")))?;

        let tags = customer
            .find_related(Tags)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询客户标签失败"))?;

        Ok(tags.into_iter().map(|m| m.into_tag()).collect())
    }
}
