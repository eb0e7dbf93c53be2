use super::{SeaOrmStorage, db_err};
use crate::entity::branches::{ActiveModel as BranchActiveModel, Entity as Branches};
use crate::entity::courses::{ActiveModel as CourseActiveModel, Column, Entity as Courses};
use crate::errors::Result;
use crate::models::classes::{
    entities::{Branch, Course},
    requests::{CreateBranchRequest, CreateCourseRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        req.validate()?;

        let model = CourseActiveModel {
            name: Set(req.name),
            price: Set(req.price),
            period: Set(req.period),
            outline: Set(req.outline),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建课程失败"))?;

        Ok(result.into_course())
    }

    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程失败"))?;

        Ok(result.map(|m| m.into_course()))
    }

    pub async fn get_course_by_name_impl(&self, name: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err("查询课程失败"))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 创建校区
    pub async fn create_branch_impl(&self, req: CreateBranchRequest) -> Result<Branch> {
        req.validate()?;

        let model = BranchActiveModel {
            name: Set(req.name),
            addr: Set(req.addr),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建校区失败"))?;

        Ok(result.into_branch())
    }

    pub async fn get_branch_by_id_impl(&self, id: i64) -> Result<Option<Branch>> {
        let result = Branches::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询校区失败"))?;

        Ok(result.map(|m| m.into_branch()))
    }
}
