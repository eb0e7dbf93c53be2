use super::{SeaOrmStorage, db_err};
use crate::entity::customer_tags;
use crate::entity::customers::{ActiveModel, Column, Entity as Customers};
use crate::errors::{CrmError, Result};
use crate::models::{
    PaginationInfo,
    choices::CustomerStatus,
    common::pagination::normalize_page,
    customers::{
        entities::Customer,
        requests::{CreateCustomerRequest, CustomerListQuery},
        responses::CustomerListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建客户，并在同一事务中关联标签
    pub async fn create_customer_impl(&self, req: CreateCustomerRequest) -> Result<Customer> {
        req.validate()?;
        let now = chrono::Utc::now().timestamp();
        let status = req.status.unwrap_or_default();

        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let model = ActiveModel {
            name: Set(req.name),
            qq: Set(req.qq),
            qq_name: Set(req.qq_name),
            phone: Set(req.phone),
            source: Set(req.source.code()),
            referral_from: Set(req.referral_from),
            consult_course_id: Set(req.consult_course_id),
            content: Set(req.content),
            status: Set(status.code()),
            consultant_id: Set(req.consultant_id),
            memo: Set(req.memo),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(db_err("创建客户失败"))?;

        let mut tag_ids = req.tag_ids;
        tag_ids.sort_unstable();
        tag_ids.dedup();
        for tag_id in tag_ids {
            customer_tags::ActiveModel {
                customer_id: Set(result.id),
                tag_id: Set(tag_id),
            }
            .insert(&txn)
            .await
            .map_err(db_err("关联客户标签失败"))?;
        }

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        result.into_customer()
    }

    /// 通过 ID 获取客户
    pub async fn get_customer_by_id_impl(&self, id: i64) -> Result<Option<Customer>> {
        let result = Customers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询客户失败"))?;

        result.map(|m| m.into_customer()).transpose()
    }

    /// 通过 QQ 号获取客户
    pub async fn get_customer_by_qq_impl(&self, qq: &str) -> Result<Option<Customer>> {
        let result = Customers::find()
            .filter(Column::Qq.eq(qq))
            .one(&self.db)
            .await
            .map_err(db_err("查询客户失败"))?;

        result.map(|m| m.into_customer()).transpose()
    }

    /// 分页列出客户
    pub async fn list_customers_with_pagination_impl(
        &self,
        query: CustomerListQuery,
    ) -> Result<CustomerListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Customers::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            // 通配符按字面匹配
            let pattern = format!("%{}%", escape_like_pattern(search.trim()));
            let like = || LikeExpr::new(pattern.clone()).escape('\\');
            select = select.filter(
                Condition::any()
                    .add(Column::Qq.like(like()))
                    .add(Column::QqName.like(like()))
                    .add(Column::Name.like(like())),
            );
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.code()));
        }

        if let Some(source) = query.source {
            select = select.filter(Column::Source.eq(source.code()));
        }

        if let Some(consultant_id) = query.consultant_id {
            select = select.filter(Column::ConsultantId.eq(consultant_id));
        }

        // 最新咨询在前
        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_err("查询客户总数失败"))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(db_err("查询客户页数失败"))?;

        // 超出总页数时直接返回空页
        let customers = if page > pages {
            Vec::new()
        } else {
            paginator
                .fetch_page(page - 1)
                .await
                .map_err(db_err("查询客户列表失败"))?
        };

        let items = customers
            .into_iter()
            .map(|m| m.into_customer())
            .collect::<Result<Vec<_>>>()?;

        Ok(CustomerListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新客户报名状态
    pub async fn update_customer_status_impl(
        &self,
        id: i64,
        status: CustomerStatus,
    ) -> Result<Option<Customer>> {
        if self.get_customer_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.code()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(db_err("更新客户状态失败"))?;

        result.into_customer().map(Some)
    }

    /// 客户显示名称：QQ 号
    pub async fn customer_label_impl(&self, id: i64) -> Result<Option<String>> {
        Ok(self.get_customer_by_id_impl(id).await?.map(|c| c.to_string()))
    }

    /// 查询客户 QQ，不存在时报错（供关联记录的显示名称使用）
    pub(crate) async fn require_customer_qq(&self, id: i64) -> Result<String> {
        let customer = Customers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询客户失败"))?
            .ok_or_else(|| CrmError::not_found(format!("客户不存在: {id}")))?;
        Ok(customer.qq)
    }
}
