use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 客户管理方法
    // 创建客户（同时关联标签）
    async fn create_customer(&self, req: CreateCustomerRequest) -> Result<Customer>;
    // 通过ID获取客户
    async fn get_customer_by_id(&self, id: i64) -> Result<Option<Customer>>;
    // 通过QQ号获取客户
    async fn get_customer_by_qq(&self, qq: &str) -> Result<Option<Customer>>;
    // 列出客户
    async fn list_customers_with_pagination(
        &self,
        query: CustomerListQuery,
    ) -> Result<CustomerListResponse>;
    // 更新报名状态
    async fn update_customer_status(
        &self,
        id: i64,
        status: CustomerStatus,
    ) -> Result<Option<Customer>>;
    // 客户显示名称
    async fn customer_label(&self, id: i64) -> Result<Option<String>>;

    /// 标签管理方法
    async fn create_tag(&self, name: &str) -> Result<Tag>;
    async fn list_tags(&self) -> Result<Vec<Tag>>;
    // 为客户添加标签，已存在时返回 false
    async fn add_customer_tag(&self, customer_id: i64, tag_id: i64) -> Result<bool>;
    async fn remove_customer_tag(&self, customer_id: i64, tag_id: i64) -> Result<bool>;
    async fn list_customer_tags(&self, customer_id: i64) -> Result<Vec<Tag>>;

    /// 跟进记录方法
    async fn create_follow_up(&self, req: CreateFollowUpRequest) -> Result<CustomerFollowUp>;
    async fn list_follow_ups(&self, customer_id: i64) -> Result<Vec<CustomerFollowUp>>;
    async fn follow_up_label(&self, id: i64) -> Result<Option<String>>;

    /// 课程与校区方法
    async fn create_course(&self, req: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn get_course_by_name(&self, name: &str) -> Result<Option<Course>>;
    async fn create_branch(&self, req: CreateBranchRequest) -> Result<Branch>;
    async fn get_branch_by_id(&self, id: i64) -> Result<Option<Branch>>;

    /// 班级管理方法
    // 创建班级（同时关联讲师）
    async fn create_class_list(&self, req: CreateClassListRequest) -> Result<ClassList>;
    async fn get_class_list_by_id(&self, id: i64) -> Result<Option<ClassList>>;
    async fn add_class_teacher(&self, class_list_id: i64, user_profile_id: i64) -> Result<bool>;
    async fn list_class_teachers(&self, class_list_id: i64) -> Result<Vec<UserProfile>>;
    async fn class_list_label(&self, id: i64) -> Result<Option<String>>;

    /// 上课记录方法
    async fn create_course_record(&self, req: CreateCourseRecordRequest) -> Result<CourseRecord>;
    async fn list_course_records(&self, class_list_id: i64) -> Result<Vec<CourseRecord>>;
    async fn course_record_label(&self, id: i64) -> Result<Option<String>>;

    /// 报名方法
    async fn create_enrollment(&self, req: CreateEnrollmentRequest) -> Result<Enrollment>;
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn update_enrollment_contract(
        &self,
        id: i64,
        update: UpdateEnrollmentContractRequest,
    ) -> Result<Option<Enrollment>>;
    async fn enrollment_label(&self, id: i64) -> Result<Option<String>>;

    /// 学习记录方法
    async fn create_study_record(&self, req: CreateStudyRecordRequest) -> Result<StudyRecord>;
    async fn update_study_record(
        &self,
        id: i64,
        update: UpdateStudyRecordRequest,
    ) -> Result<Option<StudyRecord>>;
    async fn list_study_records(&self, enrollment_id: i64) -> Result<Vec<StudyRecord>>;
    async fn study_record_label(&self, id: i64) -> Result<Option<String>>;

    /// 缴费方法
    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment>;
    async fn list_payments_for_customer(&self, customer_id: i64) -> Result<Vec<Payment>>;
    async fn payment_label(&self, id: i64) -> Result<Option<String>>;

    /// 员工与权限方法
    // 创建员工（同时分配角色）
    async fn create_user_profile(&self, req: CreateUserProfileRequest) -> Result<UserProfile>;
    async fn assign_role(&self, user_profile_id: i64, role_id: i64) -> Result<bool>;
    async fn list_user_roles(&self, user_profile_id: i64) -> Result<Vec<Role>>;
    // 员工通过角色可见的菜单（去重）
    async fn list_user_menus(&self, user_profile_id: i64) -> Result<Vec<Menu>>;
    async fn create_admin(&self, name: &str) -> Result<Admin>;
    async fn count_admins(&self) -> Result<u64>;
    // 创建角色（同时授权菜单）
    async fn create_role(&self, req: CreateRoleRequest) -> Result<Role>;
    async fn grant_menu(&self, role_id: i64, menu_id: i64) -> Result<bool>;
    async fn list_role_menus(&self, role_id: i64) -> Result<Vec<Menu>>;
    async fn create_menu(&self, req: CreateMenuRequest) -> Result<Menu>;

    /// 统计已注册表的行数
    async fn table_stats(&self) -> Result<Vec<TableStat>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
