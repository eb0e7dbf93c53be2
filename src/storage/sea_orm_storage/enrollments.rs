use super::{SeaOrmStorage, db_err};
use crate::entity::enrollments::{ActiveModel, Entity as Enrollments};
use crate::errors::Result;
use crate::models::students::{
    entities::Enrollment,
    requests::{CreateEnrollmentRequest, UpdateEnrollmentContractRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 创建报名记录
    pub async fn create_enrollment_impl(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            customer_id: Set(req.customer_id),
            class_list_id: Set(req.class_list_id),
            consultant_id: Set(req.consultant_id),
            contract_agreed: Set(req.contract_agreed),
            contract_approved: Set(req.contract_approved),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("创建报名记录失败"))?;

        Ok(result.into_enrollment())
    }

    /// 通过 ID 获取报名记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询报名记录失败"))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 更新合同确认 / 审核状态
    pub async fn update_enrollment_contract_impl(
        &self,
        id: i64,
        update: UpdateEnrollmentContractRequest,
    ) -> Result<Option<Enrollment>> {
        let Some(existing) = self.get_enrollment_by_id_impl(id).await? else {
            return Ok(None);
        };

        if update.contract_agreed.is_none() && update.contract_approved.is_none() {
            return Ok(Some(existing));
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(agreed) = update.contract_agreed {
            model.contract_agreed = Set(agreed);
        }

        if let Some(approved) = update.contract_approved {
            model.contract_approved = Set(approved);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(db_err("更新合同状态失败"))?;

        Ok(Some(result.into_enrollment()))
    }
}
