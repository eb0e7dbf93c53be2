use super::{SeaOrmStorage, db_err};
use crate::entity::class_list_teachers::{
    ActiveModel as ClassListTeacherActiveModel, Entity as ClassListTeachers,
};
use crate::entity::class_lists::{ActiveModel, Entity as ClassLists};
use crate::entity::user_profiles::{Column as UserProfileColumn, Entity as UserProfiles};
use crate::errors::{CrmError, Result};
use crate::models::{
    classes::{entities::ClassList, requests::CreateClassListRequest},
    staff::entities::UserProfile,
};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 创建班级，并在同一事务中关联讲师
    pub async fn create_class_list_impl(&self, req: CreateClassListRequest) -> Result<ClassList> {
        req.validate()?;

        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let model = ActiveModel {
            branch_id: Set(req.branch_id),
            course_id: Set(req.course_id),
            class_type: Set(req.class_type.code()),
            semester: Set(req.semester),
            start_date: Set(req.start_date.timestamp()),
            end_date: Set(req.end_date.map(|d| d.timestamp())),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(db_err("创建班级失败"))?;

        let mut teacher_ids = req.teacher_ids;
        teacher_ids.sort_unstable();
        teacher_ids.dedup();
        for user_profile_id in teacher_ids {
            ClassListTeacherActiveModel {
                class_list_id: Set(result.id),
                user_profile_id: Set(user_profile_id),
            }
            .insert(&txn)
            .await
            .map_err(db_err("关联班级讲师失败"))?;
        }

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        result.into_class_list()
    }

    /// 通过 ID 获取班级
    pub async fn get_class_list_by_id_impl(&self, id: i64) -> Result<Option<ClassList>> {
        let result = ClassLists::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询班级失败"))?;

        result.map(|m| m.into_class_list()).transpose()
    }

    /// 为班级添加讲师，关联已存在时返回 false
    pub async fn add_class_teacher_impl(
        &self,
        class_list_id: i64,
        user_profile_id: i64,
    ) -> Result<bool> {
        let existing = ClassListTeachers::find_by_id((class_list_id, user_profile_id))
            .one(&self.db)
            .await
            .map_err(db_err("查询班级讲师失败"))?;
        if existing.is_some() {
            return Ok(false);
        }

        ClassListTeacherActiveModel {
            class_list_id: Set(class_list_id),
            user_profile_id: Set(user_profile_id),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("关联班级讲师失败"))?;

        Ok(true)
    }

    /// 列出班级的讲师
    pub async fn list_class_teachers_impl(&self, class_list_id: i64) -> Result<Vec<UserProfile>> {
        let class_list = ClassLists::find_by_id(class_list_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询班级失败"))?
            .ok_or_else(|| CrmError::not_found(format!("班级不存在: {class_list_id}")))?;

        let teachers = class_list
            .find_related(UserProfiles)
            .order_by_asc(UserProfileColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询班级讲师失败"))?;

        Ok(teachers.into_iter().map(|m| m.into_user_profile()).collect())
    }
}
