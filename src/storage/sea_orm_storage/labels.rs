//! 关联记录的显示名称
//!
//! 记录本身不存在时返回 `Ok(None)`；引用的上级记录缺失时返回 NotFound。

use super::{SeaOrmStorage, db_err};
use crate::entity::branches::Entity as Branches;
use crate::entity::courses::Entity as Courses;
use crate::errors::{CrmError, Result};
use crate::models::classes::entities::ClassList;
use sea_orm::EntityTrait;

impl SeaOrmStorage {
    pub async fn follow_up_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(follow_up) = self.get_follow_up_by_id(id).await? else {
            return Ok(None);
        };
        let qq = self.require_customer_qq(follow_up.customer_id).await?;
        Ok(Some(follow_up.label(&qq)))
    }

    pub async fn class_list_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(class_list) = self.get_class_list_by_id_impl(id).await? else {
            return Ok(None);
        };
        self.label_for_class(&class_list).await.map(Some)
    }

    pub async fn course_record_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(record) = self.get_course_record_by_id(id).await? else {
            return Ok(None);
        };
        let class_label = self.require_class_label(record.class_list_id).await?;
        Ok(Some(record.label(&class_label)))
    }

    pub async fn enrollment_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(enrollment) = self.get_enrollment_by_id_impl(id).await? else {
            return Ok(None);
        };
        let qq = self.require_customer_qq(enrollment.customer_id).await?;
        let class_label = self.require_class_label(enrollment.class_list_id).await?;
        Ok(Some(enrollment.label(&qq, &class_label)))
    }

    pub async fn study_record_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(record) = self.get_study_record_by_id(id).await? else {
            return Ok(None);
        };
        let enrollment_label = self
            .enrollment_label_impl(record.enrollment_id)
            .await?
            .ok_or_else(|| {
                CrmError::not_found(format!("报名记录不存在: {}", record.enrollment_id))
            })?;
        let course_record_label = self
            .course_record_label_impl(record.course_record_id)
            .await?
            .ok_or_else(|| {
                CrmError::not_found(format!("上课记录不存在: {}", record.course_record_id))
            })?;
        Ok(Some(record.label(&enrollment_label, &course_record_label)))
    }

    pub async fn payment_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(payment) = self.get_payment_by_id(id).await? else {
            return Ok(None);
        };
        let qq = self.require_customer_qq(payment.customer_id).await?;
        Ok(Some(payment.label(&qq)))
    }

    async fn require_class_label(&self, class_list_id: i64) -> Result<String> {
        let class_list = self
            .get_class_list_by_id_impl(class_list_id)
            .await?
            .ok_or_else(|| CrmError::not_found(format!("班级不存在: {class_list_id}")))?;
        self.label_for_class(&class_list).await
    }

    // 班级名称：校区 课程 学期
    async fn label_for_class(&self, class_list: &ClassList) -> Result<String> {
        let branch = Branches::find_by_id(class_list.branch_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询校区失败"))?
            .ok_or_else(|| CrmError::not_found(format!("校区不存在: {}", class_list.branch_id)))?;
        let course = Courses::find_by_id(class_list.course_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程失败"))?
            .ok_or_else(|| CrmError::not_found(format!("课程不存在: {}", class_list.course_id)))?;
        Ok(class_list.label(&branch.name, &course.name))
    }
}
