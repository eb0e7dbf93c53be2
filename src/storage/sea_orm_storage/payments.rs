use super::{SeaOrmStorage, db_err};
use crate::entity::payments::{ActiveModel, Column, Entity as Payments};
use crate::errors::Result;
use crate::models::students::{entities::Payment, requests::CreatePaymentRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建缴费记录，金额未填写时为 500
    pub async fn create_payment_impl(&self, req: CreatePaymentRequest) -> Result<Payment> {
        req.validate()?;
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            customer_id: Set(req.customer_id),
            course_id: Set(req.course_id),
            amount: Set(req.amount()),
            consultant_id: Set(req.consultant_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("创建缴费记录失败"))?;

        Ok(result.into_payment())
    }

    /// 列出客户的缴费记录
    pub async fn list_payments_for_customer_impl(&self, customer_id: i64) -> Result<Vec<Payment>> {
        let payments = Payments::find()
            .filter(Column::CustomerId.eq(customer_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询缴费记录失败"))?;

        Ok(payments.into_iter().map(|m| m.into_payment()).collect())
    }

    pub(crate) async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>> {
        let result = Payments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询缴费记录失败"))?;

        Ok(result.map(|m| m.into_payment()))
    }
}
