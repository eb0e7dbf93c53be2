use super::{SeaOrmStorage, db_err};
use crate::entity::customer_follow_ups::{ActiveModel, Column, Entity as CustomerFollowUps};
use crate::errors::Result;
use crate::models::customers::{entities::CustomerFollowUp, requests::CreateFollowUpRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建跟进记录
    pub async fn create_follow_up_impl(
        &self,
        req: CreateFollowUpRequest,
    ) -> Result<CustomerFollowUp> {
        req.validate()?;
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            customer_id: Set(req.customer_id),
            consultant_id: Set(req.consultant_id),
            content: Set(req.content),
            intention: Set(req.intention.code()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("创建跟进记录失败"))?;

        result.into_follow_up()
    }

    /// 列出客户的跟进记录，最新的在前
    pub async fn list_follow_ups_impl(&self, customer_id: i64) -> Result<Vec<CustomerFollowUp>> {
        let follow_ups = CustomerFollowUps::find()
            .filter(Column::CustomerId.eq(customer_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询跟进记录失败"))?;

        follow_ups.into_iter().map(|m| m.into_follow_up()).collect()
    }

    pub(crate) async fn get_follow_up_by_id(&self, id: i64) -> Result<Option<CustomerFollowUp>> {
        let result = CustomerFollowUps::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询跟进记录失败"))?;

        result.map(|m| m.into_follow_up()).transpose()
    }
}
