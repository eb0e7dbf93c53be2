//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod catalog;
mod class_lists;
mod course_records;
mod customers;
mod enrollments;
mod follow_ups;
mod labels;
mod payments;
mod staff;
mod study_records;
mod tags;

#[cfg(test)]
mod tests;

use crate::config::{AppConfig, DatabaseConfig};
use crate::entity::registry;
use crate::errors::{CrmError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

/// 数据库错误转换：保留约束冲突类型，并附加操作上下文
pub(crate) fn db_err(context: &'static str) -> impl FnOnce(DbErr) -> CrmError {
    move |e| CrmError::from(e).with_context(context)
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database).await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CrmError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 底层连接
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        // 外键约束需要显式开启
        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CrmError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CrmError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CrmError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CrmError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 统计所有已注册表的行数
    pub async fn table_stats_impl(&self) -> Result<Vec<crate::models::TableStat>> {
        registry::count_rows(&self.db)
            .await
            .map_err(db_err("统计数据表失败"))
    }
}

// Storage trait 实现
use crate::models::{
    TableStat,
    choices::CustomerStatus,
    classes::{
        entities::{Branch, ClassList, Course, CourseRecord},
        requests::{
            CreateBranchRequest, CreateClassListRequest, CreateCourseRecordRequest,
            CreateCourseRequest,
        },
    },
    customers::{
        entities::{Customer, CustomerFollowUp, Tag},
        requests::{CreateCustomerRequest, CreateFollowUpRequest, CustomerListQuery},
        responses::CustomerListResponse,
    },
    staff::{
        entities::{Admin, Menu, Role, UserProfile},
        requests::{CreateMenuRequest, CreateRoleRequest, CreateUserProfileRequest},
    },
    students::{
        entities::{Enrollment, Payment, StudyRecord},
        requests::{
            CreateEnrollmentRequest, CreatePaymentRequest, CreateStudyRecordRequest,
            UpdateEnrollmentContractRequest, UpdateStudyRecordRequest,
        },
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 客户模块
    async fn create_customer(&self, req: CreateCustomerRequest) -> Result<Customer> {
        self.create_customer_impl(req).await
    }

    async fn get_customer_by_id(&self, id: i64) -> Result<Option<Customer>> {
        self.get_customer_by_id_impl(id).await
    }

    async fn get_customer_by_qq(&self, qq: &str) -> Result<Option<Customer>> {
        self.get_customer_by_qq_impl(qq).await
    }

    async fn list_customers_with_pagination(
        &self,
        query: CustomerListQuery,
    ) -> Result<CustomerListResponse> {
        self.list_customers_with_pagination_impl(query).await
    }

    async fn update_customer_status(
        &self,
        id: i64,
        status: CustomerStatus,
    ) -> Result<Option<Customer>> {
        self.update_customer_status_impl(id, status).await
    }

    async fn customer_label(&self, id: i64) -> Result<Option<String>> {
        self.customer_label_impl(id).await
    }

    // 标签模块
    async fn create_tag(&self, name: &str) -> Result<Tag> {
        self.create_tag_impl(name).await
    }

    async fn list_tags(&self) -> Result<Vec<Tag>> {
        self.list_tags_impl().await
    }

    async fn add_customer_tag(&self, customer_id: i64, tag_id: i64) -> Result<bool> {
        self.add_customer_tag_impl(customer_id, tag_id).await
    }

    async fn remove_customer_tag(&self, customer_id: i64, tag_id: i64) -> Result<bool> {
        self.remove_customer_tag_impl(customer_id, tag_id).await
    }

    async fn list_customer_tags(&self, customer_id: i64) -> Result<Vec<Tag>> {
        self.list_customer_tags_impl(customer_id).await
    }

    // 跟进模块
    async fn create_follow_up(&self, req: CreateFollowUpRequest) -> Result<CustomerFollowUp> {
        self.create_follow_up_impl(req).await
    }

    async fn list_follow_ups(&self, customer_id: i64) -> Result<Vec<CustomerFollowUp>> {
        self.list_follow_ups_impl(customer_id).await
    }

    async fn follow_up_label(&self, id: i64) -> Result<Option<String>> {
        self.follow_up_label_impl(id).await
    }

    // 课程与校区模块
    async fn create_course(&self, req: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(req).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_name(&self, name: &str) -> Result<Option<Course>> {
        self.get_course_by_name_impl(name).await
    }

    async fn create_branch(&self, req: CreateBranchRequest) -> Result<Branch> {
        self.create_branch_impl(req).await
    }

    async fn get_branch_by_id(&self, id: i64) -> Result<Option<Branch>> {
        self.get_branch_by_id_impl(id).await
    }

    // 班级模块
    async fn create_class_list(&self, req: CreateClassListRequest) -> Result<ClassList> {
        self.create_class_list_impl(req).await
    }

    async fn get_class_list_by_id(&self, id: i64) -> Result<Option<ClassList>> {
        self.get_class_list_by_id_impl(id).await
    }

    async fn add_class_teacher(&self, class_list_id: i64, user_profile_id: i64) -> Result<bool> {
        self.add_class_teacher_impl(class_list_id, user_profile_id)
            .await
    }

    async fn list_class_teachers(&self, class_list_id: i64) -> Result<Vec<UserProfile>> {
        self.list_class_teachers_impl(class_list_id).await
    }

    async fn class_list_label(&self, id: i64) -> Result<Option<String>> {
        self.class_list_label_impl(id).await
    }

    // 上课记录模块
    async fn create_course_record(&self, req: CreateCourseRecordRequest) -> Result<CourseRecord> {
        self.create_course_record_impl(req).await
    }

    async fn list_course_records(&self, class_list_id: i64) -> Result<Vec<CourseRecord>> {
        self.list_course_records_impl(class_list_id).await
    }

    async fn course_record_label(&self, id: i64) -> Result<Option<String>> {
        self.course_record_label_impl(id).await
    }

    // 报名模块
    async fn create_enrollment(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.create_enrollment_impl(req).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn update_enrollment_contract(
        &self,
        id: i64,
        update: UpdateEnrollmentContractRequest,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_contract_impl(id, update).await
    }

    async fn enrollment_label(&self, id: i64) -> Result<Option<String>> {
        self.enrollment_label_impl(id).await
    }

    // 学习记录模块
    async fn create_study_record(&self, req: CreateStudyRecordRequest) -> Result<StudyRecord> {
        self.create_study_record_impl(req).await
    }

    async fn update_study_record(
        &self,
        id: i64,
        update: UpdateStudyRecordRequest,
    ) -> Result<Option<StudyRecord>> {
        self.update_study_record_impl(id, update).await
    }

    async fn list_study_records(&self, enrollment_id: i64) -> Result<Vec<StudyRecord>> {
        self.list_study_records_impl(enrollment_id).await
    }

    async fn study_record_label(&self, id: i64) -> Result<Option<String>> {
        self.study_record_label_impl(id).await
    }

    // 缴费模块
    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment> {
        self.create_payment_impl(req).await
    }

    async fn list_payments_for_customer(&self, customer_id: i64) -> Result<Vec<Payment>> {
        self.list_payments_for_customer_impl(customer_id).await
    }

    async fn payment_label(&self, id: i64) -> Result<Option<String>> {
        self.payment_label_impl(id).await
    }

    // 员工与权限模块
    async fn create_user_profile(&self, req: CreateUserProfileRequest) -> Result<UserProfile> {
        self.create_user_profile_impl(req).await
    }

    async fn assign_role(&self, user_profile_id: i64, role_id: i64) -> Result<bool> {
        self.assign_role_impl(user_profile_id, role_id).await
    }

    async fn list_user_roles(&self, user_profile_id: i64) -> Result<Vec<Role>> {
        self.list_user_roles_impl(user_profile_id).await
    }

    async fn list_user_menus(&self, user_profile_id: i64) -> Result<Vec<Menu>> {
        self.list_user_menus_impl(user_profile_id).await
    }

    async fn create_admin(&self, name: &str) -> Result<Admin> {
        self.create_admin_impl(name).await
    }

    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }

    async fn create_role(&self, req: CreateRoleRequest) -> Result<Role> {
        self.create_role_impl(req).await
    }

    async fn grant_menu(&self, role_id: i64, menu_id: i64) -> Result<bool> {
        self.grant_menu_impl(role_id, menu_id).await
    }

    async fn list_role_menus(&self, role_id: i64) -> Result<Vec<Menu>> {
        self.list_role_menus_impl(role_id).await
    }

    async fn create_menu(&self, req: CreateMenuRequest) -> Result<Menu> {
        self.create_menu_impl(req).await
    }

    // 统计
    async fn table_stats(&self) -> Result<Vec<TableStat>> {
        self.table_stats_impl().await
    }
}
